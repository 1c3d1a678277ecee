mod extract;
mod helpers;
