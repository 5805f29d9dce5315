mod extractors;
mod profile_form;
