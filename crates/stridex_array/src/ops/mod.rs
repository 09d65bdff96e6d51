mod binary;
mod broadcasting;
