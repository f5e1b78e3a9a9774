pub mod errors;
pub mod logging;
pub mod session_store;

// Available in fullstack mode (both client and server)
pub mod hooks;
