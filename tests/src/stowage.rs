mod hazard;
mod weights;
