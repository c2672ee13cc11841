

// Ambient tests
mod error;
