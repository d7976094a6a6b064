pub mod dispatch;

mod angle;
mod brief;
mod chain;
mod export;
mod hooks;
mod ideas;
mod learn;
mod package;
mod perf;
mod risk;
mod select;
mod shared;
mod shots;
mod show;
mod snapshot;
mod sync;
