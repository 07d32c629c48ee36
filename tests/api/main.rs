mod booking;
mod contact;
mod horses;
mod volunteer;
