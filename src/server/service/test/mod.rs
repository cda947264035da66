mod availability;
mod conversation;
mod favorite;
mod message;
mod payment;
mod rental_completion;
mod reservation;
mod team;
mod team_application;
mod user;
mod webhook;
