mod auth;
mod profile;
mod progress;
mod webhook;
