pub mod input;     // Token-based console input
pub mod renderer;  // Injected renderer trait
pub mod terminal;  // Terminal context wrapper
