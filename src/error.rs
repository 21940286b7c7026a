use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    #[error("Polyline error: {0}")]
    Polyline(#[from] PolylineError),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolylineError {
    #[error("Polyline ends in the middle of a value at byte {offset}")]
    Truncated { offset: usize },

    #[error("Invalid polyline character {character:?} at byte {offset}")]
    InvalidCharacter { character: char, offset: usize },

    #[error("Polyline value starting at byte {offset} overflows 64 bits")]
    Overflow { offset: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjError {
    #[error("Invalid UTM zone {0}, expected 1..=60")]
    InvalidZone(u8),
}
