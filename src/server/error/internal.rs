use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application doesn't know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    UnknownEnumValue {
        /// Column holding the value
        column: &'static str,
        /// The raw stored value
        value: String,
    },

    /// A reserved root topic id is occupied by a regular comment.
    ///
    /// Raised while seeding the root topics at startup; the database was
    /// populated without the reserved roots in place.
    #[error("Reserved root topic id {0} is occupied by a comment that is not a root")]
    RootTopicConflict(i32),

    /// A row that was just written could not be read back.
    #[error("{entity} {id} not found after write")]
    MissingAfterWrite {
        /// Entity name used in the message
        entity: &'static str,
        /// Primary key of the missing row
        id: i32,
    },
}
