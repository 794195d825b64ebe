mod field_error;
