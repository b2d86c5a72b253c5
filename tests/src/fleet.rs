mod limits;
mod transfer;
