//! Message keys resolved by the repository pipeline.
//!
//! Placeholders: `{entity}` is the entity type name, `{field}` the unique field.

pub const NECESSARY_DATA_NOT_PROVIDED: &str = "NecessaryDataNotProvided";
pub const INVALID_GUID: &str = "InvalidGuid";
pub const ENTITY_NOT_FOUND: &str = "EntityNotFound";
pub const DUPLICATE_ENTRY: &str = "DuplicateEntry";
pub const DATABASE_ERROR: &str = "DatabaseError";
pub const INVALID_BEARER_TOKEN: &str = "InvalidBearerToken";
pub const CREATION_SUCCESS: &str = "CreationSuccess";
pub const UPDATE_SUCCESS: &str = "UpdateSuccess";
pub const DELETION_SUCCESS: &str = "DeletionSuccess";
pub const ACTIVATION_SUCCESS: &str = "ActivationSuccess";
pub const DEACTIVATION_SUCCESS: &str = "DeactivationSuccess";
pub const READ_SUCCESS: &str = "ReadSuccess";
pub const SEARCH_SUCCESS: &str = "SearchSuccess";

pub const EXISTENCE_KEYS: &[&str] = &[
    NECESSARY_DATA_NOT_PROVIDED,
    INVALID_GUID,
    ENTITY_NOT_FOUND,
    READ_SUCCESS,
];

pub const CREATE_KEYS: &[&str] = &[
    NECESSARY_DATA_NOT_PROVIDED,
    DUPLICATE_ENTRY,
    DATABASE_ERROR,
    CREATION_SUCCESS,
];

pub const UPDATE_KEYS: &[&str] = &[
    NECESSARY_DATA_NOT_PROVIDED,
    DUPLICATE_ENTRY,
    DATABASE_ERROR,
    UPDATE_SUCCESS,
];

pub const DELETE_KEYS: &[&str] = &[DATABASE_ERROR, DELETION_SUCCESS];

pub const STATUS_KEYS: &[&str] = &[DATABASE_ERROR, ACTIVATION_SUCCESS, DEACTIVATION_SUCCESS];

pub const READ_KEYS: &[&str] = &[DATABASE_ERROR, INVALID_BEARER_TOKEN, READ_SUCCESS, SEARCH_SUCCESS];
