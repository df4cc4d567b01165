use std::fmt;
use std::sync::Arc;

use backend::HttpBackendConfig;
use backend::repository::{CourseSessionRecord, InMemoryBackend, LessonNoteRecord};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use notes_core::model::{CourseId, NoteId, SessionId, StudentId, StudentRole};
use services::{AccessService, AppServices, AudioChannelService, Clock, NotesService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStudentId { raw: String },
    MissingStudentId,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStudentId { raw } => write!(f, "invalid --student-id value: {raw}"),
            ArgsError::MissingStudentId => {
                write!(f, "a student id is required when a backend is configured")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    student_id: StudentId,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn student_id(&self) -> StudentId {
        self.student_id
    }

    fn notes(&self) -> Arc<NotesService> {
        self.services.notes()
    }

    fn access(&self) -> Arc<AccessService> {
        self.services.access()
    }

    fn audio(&self) -> Arc<AudioChannelService> {
        self.services.audio()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--api-url <url> --api-key <key>] [--student-id <uuid>]");
    eprintln!("  cargo run -p app -- demo [--student-id <uuid>]");
    eprintln!();
    eprintln!("With no backend configured, `ui` starts against seeded demo data.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NOTES_API_URL, NOTES_API_KEY, NOTES_STUDENT_ID");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Demo,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "demo" => Some(Self::Demo),
            _ => None,
        }
    }
}

struct Args {
    api_url: Option<String>,
    api_key: Option<String>,
    student_id: Option<StudentId>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = None;
        let mut api_key = None;
        let mut student_id = std::env::var("NOTES_STUDENT_ID")
            .ok()
            .and_then(|value| value.parse::<StudentId>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => api_url = Some(require_value(args, "--api-url")?),
                "--api-key" => api_key = Some(require_value(args, "--api-key")?),
                "--student-id" => {
                    let value = require_value(args, "--student-id")?;
                    student_id = Some(
                        value
                            .parse()
                            .map_err(|_| ArgsError::InvalidStudentId { raw: value.clone() })?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            api_key,
            student_id,
        })
    }

    /// Explicit flags win over the environment; both URL and key must be
    /// present for the hosted backend to be used at all.
    fn backend_config(&self) -> Option<HttpBackendConfig> {
        match (&self.api_url, &self.api_key) {
            (Some(base_url), Some(api_key)) => Some(HttpBackendConfig {
                base_url: base_url.clone(),
                api_key: api_key.clone(),
            }),
            _ => HttpBackendConfig::from_env(),
        }
    }
}

const SAMPLE_NOTES: &str = r"This week we studied what makes an action count: the intention behind it, and the trust that carries it through.

## Key Themes
### Sincerity of Intention
Actions are weighed by the purpose behind them. The same deed can be habit, show, or worship depending on the heart.

### Reliance on Allah
True tawakkul pairs effort with trust. Tie your camel first.

## Quranic Verses
**Surah Al-Fatiha 1:5**
> It is You we worship and You we ask for help.

**Surah Al-Baqarah 2:286**
> Allah does not burden a soul beyond that it can bear.

## Key Vocabulary
| Arabic | Transliteration | Meaning |
|--------|-----------------|---------|
| نية | niyyah | intention |
| توكل | tawakkul | reliance on God |
| إخلاص | ikhlas | sincerity |

## Relevant Hadith
> Actions are but by intentions, and every man shall have only that which he intended.
**Source:** Bukhari and Muslim

## Stories & Examples
### The Two Migrants
Two men made the same journey to Madinah. One travelled for Allah and His Messenger; the other for a woman he hoped to marry. Same road, different rewards.

## Action Points
1. **Renew your intention** before each of the five daily prayers this week.
2. **Keep a reflection journal** noting one sincere act per day.

## Key Takeaways
- Intention turns routine into worship.
- Trust in Allah never excuses abandoning the means.
- Sincerity is a private matter between the heart and its Lord.

## Quiz
**Q1.** What does niyyah mean?
- A) Patience
- B) Intention
- C) Charity
**Answer:** B Intention is the inner purpose behind an action.

**Q2.** Which surah contains the verse 'It is You we worship'?
- A) Al-Fatiha
- B) Al-Ikhlas
- C) Al-Kahf
**Answer:** A

## Preparation for Next Session
- Read the translation of Surah Al-Kahf, verses 1 to 10.
- Bring one example of tawakkul from your own week.
";

const LOCKED_NOTES: &str = r"## Key Themes
### The Structure of Salah
Each position of the prayer has its own dhikr and its own stillness.

## Key Takeaways
- Prayer is a conversation, not a recital.
";

/// Seed a course with one free and one locked session so every screen of
/// the app is reachable without a hosted backend.
fn seed_demo(repo: &InMemoryBackend, student_id: StudentId, clock: &Clock) {
    let course_id = CourseId::random();
    repo.insert_enrollment(course_id, student_id, StudentRole::Student);
    repo.set_price(course_id, 120);

    let free_session = SessionId::random();
    repo.insert_note(LessonNoteRecord {
        id: NoteId::random(),
        title: "Session 1: Intention and Trust".to_string(),
        summary: Some("Niyyah, ikhlas and tawakkul in daily practice.".to_string()),
        insights_content: SAMPLE_NOTES.to_string(),
        created_at: clock.now(),
        course_session: CourseSessionRecord {
            id: free_session,
            session_number: 1,
            course_id,
        },
    });

    let locked_session = SessionId::random();
    repo.insert_note(LessonNoteRecord {
        id: NoteId::random(),
        title: "Session 2: Pillars of Prayer".to_string(),
        summary: Some("The inner and outer structure of salah.".to_string()),
        insights_content: LOCKED_NOTES.to_string(),
        created_at: clock.now(),
        course_session: CourseSessionRecord {
            id: locked_session,
            session_number: 2,
            course_id,
        },
    });

    eprintln!("demo data ready:");
    eprintln!("  free session:   {free_session}");
    eprintln!("  locked session: {locked_session}");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launch the UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let clock = Clock::default_clock();
    let (services, student_id) = match cmd {
        Command::Demo => {
            let (services, repo) = AppServices::in_memory(clock);
            let student_id = args.student_id.unwrap_or_else(StudentId::random);
            seed_demo(&repo, student_id, &clock);
            (services, student_id)
        }
        Command::Ui => match args.backend_config() {
            Some(config) => {
                let student_id = args.student_id.ok_or(ArgsError::MissingStudentId)?;
                (AppServices::http(config, clock)?, student_id)
            }
            None => {
                eprintln!("no backend configured; starting against demo data");
                let (services, repo) = AppServices::in_memory(clock);
                let student_id = args.student_id.unwrap_or_else(StudentId::random);
                seed_demo(&repo, student_id, &clock);
                (services, student_id)
            }
        },
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        student_id,
        services,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Foundations Notes")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
