//! Records bound by the sample. One per source, plus a profile record for the UUID
//! and text-sequence types.

use paramex::param_record;
use serde::Serialize;
use uuid::Uuid;

param_record! {
    #[derive(Debug, Default, Clone, PartialEq, Serialize)]
    pub struct HeaderParams {
        pub name: String => "name",
        pub age: i64 => "age",
        pub height: f64 => "height",
        pub married: bool => "married",
    }
}

param_record! {
    #[derive(Debug, Default, Clone, PartialEq, Serialize)]
    pub struct QueryParams {
        pub name: String => "name",
        pub age: i32 => "age",
        pub height: f32 => "height",
        pub married: bool => "married",
    }
}

param_record! {
    #[derive(Debug, Default, Clone, PartialEq, Serialize)]
    pub struct FormParams {
        pub name: String => "name",
        pub age: isize => "age",
        pub height: f64 => "height",
        pub married: bool => "married",
    }
}

param_record! {
    #[derive(Debug, Default, Clone, PartialEq, Serialize)]
    pub struct ProfileParams {
        pub id: Uuid => "id",
        pub values: Vec<String> => "strArray",
        /// Filled by the application, never from the request.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub note: String => "-",
    }
}
