mod common;
mod ranking;
mod signals;
