use std::io::{ErrorKind, IsTerminal};
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api::{self, GenerateOptions};
use crate::domain::{AppError, Audience, GenerationRequest, Tone, WritingStyle};

#[derive(Args)]
pub struct GenerateArgs {
    /// Blog topic, e.g. "Future of AI in Healthcare"
    #[arg(short, long)]
    topic: Option<String>,
    /// Minimum word count
    #[arg(
        short,
        long = "words",
        value_parser = clap::value_parser!(u32).range(
            GenerationRequest::MIN_WORD_COUNT as i64..=GenerationRequest::MAX_WORD_COUNT as i64
        )
    )]
    words: Option<u32>,
    /// Writing style (see `blogwright options`)
    #[arg(short, long, value_parser = parse_style)]
    style: Option<WritingStyle>,
    /// Tone of voice (see `blogwright options`)
    #[arg(long, value_parser = parse_tone)]
    tone: Option<Tone>,
    /// Target audience (see `blogwright options`)
    #[arg(short, long, value_parser = parse_audience)]
    audience: Option<Audience>,
    /// Ask for every field not given as a flag
    #[arg(short, long)]
    interactive: bool,
    /// Print the composed prompt instead of calling the model
    #[arg(long)]
    dry_run: bool,
    /// Backend config file (defaults to ./blogwright.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let dry_run = args.dry_run;
    let config_path = args.config.clone();

    let Some(request) = resolve_request(args)? else {
        return Ok(());
    };

    let output = if dry_run {
        api::compose_prompt(&request)?
    } else {
        api::generate(&request, &GenerateOptions { config_path, api_key: None })?
    };

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Fill in missing fields from prompts or defaults. `None` means the user cancelled.
fn resolve_request(args: GenerateArgs) -> Result<Option<GenerationRequest>, AppError> {
    let terminal = is_interactive_terminal();
    if args.interactive && !terminal {
        return Err(AppError::config_error("--interactive requires a terminal"));
    }
    let interactive = args.interactive;

    let topic = match args.topic {
        Some(topic) => topic,
        None if terminal => match prompt_topic()? {
            Some(topic) => topic,
            None => return Ok(None),
        },
        None => {
            return Err(AppError::config_error(
                "Missing --topic (no terminal available to ask for it)",
            ));
        }
    };

    let words = match args.words {
        Some(words) => words,
        None if interactive => match prompt_word_count()? {
            Some(words) => words,
            None => return Ok(None),
        },
        None => GenerationRequest::DEFAULT_WORD_COUNT,
    };

    let style = match args.style {
        Some(style) => style,
        None if interactive => match select_label("Writing style", &WritingStyle::ALL)? {
            Some(style) => style,
            None => return Ok(None),
        },
        None => WritingStyle::default(),
    };

    let tone = match args.tone {
        Some(tone) => tone,
        None if interactive => match select_label("Tone", &Tone::ALL)? {
            Some(tone) => tone,
            None => return Ok(None),
        },
        None => Tone::default(),
    };

    let audience = match args.audience {
        Some(audience) => audience,
        None if interactive => match select_label("Target audience", &Audience::ALL)? {
            Some(audience) => audience,
            None => return Ok(None),
        },
        None => Audience::default(),
    };

    Ok(Some(
        GenerationRequest::new(topic)
            .with_word_count(words)
            .with_style(style)
            .with_tone(tone)
            .with_audience(audience),
    ))
}

fn prompt_topic() -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt("Blog topic")
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read topic: {}", err))),
    }
}

fn prompt_word_count() -> Result<Option<u32>, AppError> {
    let min = GenerationRequest::MIN_WORD_COUNT;
    let max = GenerationRequest::MAX_WORD_COUNT;

    match Input::<u32>::new()
        .with_prompt(format!("Word count ({}-{})", min, max))
        .default(GenerationRequest::DEFAULT_WORD_COUNT)
        .validate_with(move |value: &u32| -> Result<(), String> {
            if (min..=max).contains(value) {
                Ok(())
            } else {
                Err(format!("Word count must be between {} and {}", min, max))
            }
        })
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read word count: {}", err))),
    }
}

fn select_label<T>(prompt: &str, choices: &[T]) -> Result<Option<T>, AppError>
where
    T: Clone + std::fmt::Display,
{
    let items: Vec<String> = choices.iter().map(|choice| choice.to_string()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| {
            AppError::config_error(format!("Failed to select {}: {}", prompt.to_lowercase(), err))
        })?;

    Ok(selection.map(|index| choices[index].clone()))
}

fn parse_style(value: &str) -> Result<WritingStyle, String> {
    WritingStyle::parse_known(value).ok_or_else(|| {
        unknown_label("style", value, WritingStyle::ALL.iter().map(|s| s.label().to_string()))
    })
}

fn parse_tone(value: &str) -> Result<Tone, String> {
    Tone::parse_known(value)
        .ok_or_else(|| unknown_label("tone", value, Tone::ALL.iter().map(|t| t.label().to_string())))
}

fn parse_audience(value: &str) -> Result<Audience, String> {
    Audience::parse_known(value).ok_or_else(|| {
        unknown_label("audience", value, Audience::ALL.iter().map(|a| a.label().to_string()))
    })
}

fn unknown_label(kind: &str, value: &str, known: impl Iterator<Item = String>) -> String {
    format!("unknown {} '{}'; expected one of: {}", kind, value, known.collect::<Vec<_>>().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parsers_accept_fixed_sets_only() {
        assert_eq!(parse_style("listicle"), Ok(WritingStyle::Listicle));
        assert_eq!(parse_tone("Neutral"), Ok(Tone::Neutral));
        assert_eq!(parse_audience("industry professionals"), Ok(Audience::IndustryProfessionals));

        let err = parse_style("Haiku").unwrap_err();
        assert!(err.contains("unknown style 'Haiku'"));
        assert!(err.contains("Professional, Conversational"));
    }

    #[test]
    fn flags_fill_the_request_without_prompting() {
        let args = GenerateArgs {
            topic: Some("Tea".into()),
            words: Some(600),
            style: Some(WritingStyle::Technical),
            tone: Some(Tone::Friendly),
            audience: Some(Audience::Students),
            interactive: false,
            dry_run: true,
            config: None,
        };

        let request = resolve_request(args).unwrap().unwrap();

        assert_eq!(request.topic(), "Tea");
        assert_eq!(request.word_count(), 600);
        assert_eq!(request.style(), &WritingStyle::Technical);
        assert_eq!(request.tone(), &Tone::Friendly);
        assert_eq!(request.audience(), &Audience::Students);
    }
}
