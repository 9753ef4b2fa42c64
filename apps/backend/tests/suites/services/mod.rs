mod login;
mod profile;
mod refresh;
mod register;
