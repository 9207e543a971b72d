//! Tipos de erro para a fronteira JSON da camada de normalização.
//!
//! Define [`DocumentError`] com variantes para texto JSON inválido e
//! payloads bem-formados que não são objetos. Usa `thiserror` para
//! derivar `Display` e `Error` automaticamente a partir dos atributos
//! `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao aceitar um documento bruto do serviço.
///
/// A normalização em si nunca falha — campos ausentes ou malformados
/// degradam para valores default. Apenas os pontos de entrada que
/// recebem o payload ainda não estruturado retornam erro:
/// - [`Json`](DocumentError::Json) — o texto não é JSON válido
/// - [`NotAnObject`](DocumentError::NotAnObject) — JSON válido, mas não é um objeto
#[derive(Debug, Error)]
pub enum DocumentError {
    /// O payload não pôde ser interpretado como JSON.
    /// Encapsula o erro original do `serde_json` via `#[from]`.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// O payload é JSON válido mas não é um objeto.
    /// O campo `kind` indica o que foi encontrado (ex.: "array", "string").
    #[error("workflow document must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}
