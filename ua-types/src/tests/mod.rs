mod status_code;
mod variant;
