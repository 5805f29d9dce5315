mod field_update;
mod profile_update;
