use std::ffi::OsString;

use clap::builder::ArgAction;

pub const USAGE: &str = "Uso: ru_watcher [Arg]
Arg pode ser:
 - help/ajuda: mostra este texto
 - clear/limpar: apaga o cardapio salvo
 - Data:
\t- hoje/today
\t- amanha/tomorrow
\t- formato %d.%m.%Y
\t- dia (%d)
\t- semana/week";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    /// A date token, resolved later against the current date.
    Lookup(String),
    /// Wrong number of arguments or an unknown flag.
    Usage,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("ru_watcher")
        .about("Mostra o cardapio do RU da UFSC")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("token")
                .index(1)
                .help("hoje, amanha, semana, a day of month or a DD.MM.YYYY date")
                .num_args(0..)
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

/// Parses the full argument list, program name first.
pub fn parse_args<I, T>(args: I) -> Command
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Ok(matches) = build_clap_command().try_get_matches_from(args) else {
        return Command::Usage;
    };
    let tokens: Vec<&String> = matches
        .get_many::<String>("token")
        .map(Iterator::collect)
        .unwrap_or_default();
    let [token] = tokens.as_slice() else {
        return Command::Usage;
    };
    match token.to_lowercase().as_str() {
        "help" | "ajuda" => Command::Help,
        "clear" | "limpar" => Command::Clear,
        _ => Command::Lookup((*token).clone()),
    }
}
