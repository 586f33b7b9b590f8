mod common;
mod flow;
mod intake;
mod service;
