use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    auth, CourseEditor, CourseListViewModel, CourseRepository, DeleteOutcome,
    HttpCourseRepository, Notice, SubmitError,
};
use shared::domain::{CourseId, CourseInput, LoginForm, RegisterForm};
use tracing::info;
use url::Url;

mod commands;
mod config;
mod render;

use commands::{delete_confirmed, load_list, DeleteFlow, ListArgs};
use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "course-admin", about = "Manage the course catalog over its REST API")]
struct Cli {
    /// Base URL of the backend exposing `/courses`.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct CourseFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    credit: Option<f64>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    teacher: Option<String>,
}

impl CourseFields {
    fn apply_to(self, input: &mut CourseInput) {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(credit) = self.credit {
            input.credit = credit;
        }
        if let Some(category) = self.category {
            input.category = category;
        }
        if let Some(teacher) = self.teacher {
            input.teacher = teacher;
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search, filter and page through courses.
    List(ListArgs),
    Show {
        id: String,
    },
    Add(CourseFields),
    /// Replace a course; omitted fields keep their stored values.
    Edit {
        id: String,
        #[command(flatten)]
        fields: CourseFields,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
        #[command(flatten)]
        list: ListArgs,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();

    let base_url = Url::parse(&settings.api_url)
        .with_context(|| format!("invalid api url '{}'", settings.api_url))?;
    info!(%base_url, "course admin starting");
    let repository: Arc<dyn CourseRepository> = Arc::new(HttpCourseRepository::new(base_url));

    match cli.command {
        Command::List(args) => {
            let mut view_model = CourseListViewModel::new(repository);
            let loaded = load_list(&mut view_model, args).await;
            print!("{}", render::render_list(&view_model.view()));
            print_notices(view_model.drain_notices());
            loaded?;
        }
        Command::Show { id } => {
            let course = repository.fetch(CourseId::from(id)).await?;
            print!("{}", render::render_course(&course));
        }
        Command::Add(fields) => {
            let mut input = CourseInput::default();
            fields.apply_to(&mut input);
            let mut editor = CourseEditor::new(repository, None);
            submit(&mut editor, input).await?;
        }
        Command::Edit { id, fields } => {
            let mut editor = CourseEditor::new(repository, Some(CourseId::from(id)));
            let mut input = editor.prefill().await;
            print_notices(editor.drain_notices());
            fields.apply_to(&mut input);
            submit(&mut editor, input).await?;
        }
        Command::Delete { id, yes, list } => {
            let mut view_model = CourseListViewModel::new(repository);
            if let Err(err) = load_list(&mut view_model, list).await {
                print_notices(view_model.drain_notices());
                return Err(err);
            }
            let question = "Bạn có chắc muốn xóa mục này?";
            let result =
                delete_confirmed(&mut view_model, CourseId::from(id.as_str()), || {
                    Ok(yes || confirm(question)?)
                })
                .await;
            print_notices(view_model.drain_notices());
            match result? {
                DeleteFlow::Cancelled => {
                    println!("Đã hủy");
                    return Ok(());
                }
                DeleteFlow::Finished(DeleteOutcome::AlreadyGone) => {
                    println!("Mục {id} không còn tồn tại");
                }
                DeleteFlow::Finished(DeleteOutcome::Deleted) => {}
            }
            print!("{}", render::render_list(&view_model.view()));
        }
        Command::Login { email, password } => {
            let notice = auth::login(&LoginForm { email, password })
                .map_err(|errors| invalid_form(&errors))?;
            print_notices(vec![notice]);
        }
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let form = RegisterForm {
                username,
                email,
                password,
                confirm_password,
            };
            let notice = auth::register(&form).map_err(|errors| invalid_form(&errors))?;
            print_notices(vec![notice]);
        }
    }

    Ok(())
}

async fn submit(editor: &mut CourseEditor, input: CourseInput) -> Result<()> {
    let result = editor.submit(input).await;
    print_notices(editor.drain_notices());
    match result {
        Ok(course) => {
            print!("{}", render::render_course(&course));
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => Err(invalid_form(&errors)),
        Err(SubmitError::Repository(err)) => Err(err.into()),
    }
}

fn invalid_form(errors: &shared::validation::ValidationErrors) -> anyhow::Error {
    eprint!("{}", render::render_validation(errors));
    anyhow::anyhow!("form has {} invalid field(s)", errors.fields.len())
}

fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        if notice.is_error() {
            eprintln!("{}", render::render_notice(&notice));
        } else {
            println!("{}", render::render_notice(&notice));
        }
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        bail!("no confirmation received");
    }
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "có"))
}
