//! Terminal presentation adapter.

mod command;
mod presenter;
mod render;

pub use presenter::TerminalPresenter;
