use thiserror::Error;

/// Smal feiltaksonomi: tynne serier er ALDRI feil (de gir
/// sentinel-resultater), bare ugyldige parametre og ødelagt input
/// ved JSON-grensen avvises.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Kaller-bug: alpha utenfor (0,1], ikke-finite verdi o.l.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Ødelagt JSON/dato ved grensen. Feiler raskt, ingen stille coercion.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
