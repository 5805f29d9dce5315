mod image_store;
