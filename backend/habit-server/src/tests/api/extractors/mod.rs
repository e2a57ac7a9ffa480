mod auth_user;
mod json_body;
