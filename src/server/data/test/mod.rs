mod availability;
mod conversation;
mod favorite;
mod message;
mod payment;
mod reservation;
mod review;
mod team;
mod team_application;
mod user;
mod vehicle;
