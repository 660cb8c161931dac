use super::const_error;

const_error!(NOT_FOUND, NOT_FOUND, "resource not found.");
const_error!(UNPROCESSABLE, UNPROCESSABLE_ENTITY, "unprocessable.");
const_error!(
    METHOD_NOT_ALLOWED,
    METHOD_NOT_ALLOWED,
    "method not allowed."
);
const_error!(BAD_REQUEST, BAD_REQUEST, "bad request.");
const_error!(PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE, "payload too large.");
const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "internal server error.");
