mod record_id;
