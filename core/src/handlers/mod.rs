pub mod signal_commands;


pub use signal_commands::SignalCommands;
