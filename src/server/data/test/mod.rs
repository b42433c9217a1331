mod car;
mod reservation;
mod user;
