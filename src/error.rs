use crate::parse;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] parse::Error),
    #[error("Request error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Cache error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Message shown to the user when the run fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(e) if e.is_timeout() => "Time out na requisicao.".to_string(),
            Self::Network(_) => "Erro na rede. Verifique sua conexao.".to_string(),
            Self::Parse(e) => format!("Cardapio indisponivel: {e}"),
            e => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
