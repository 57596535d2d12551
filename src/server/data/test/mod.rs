mod comment;
mod user;
