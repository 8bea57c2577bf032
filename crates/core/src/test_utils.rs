//! Shared fixtures for unit tests.

use crate::descriptor::{BodyParam, MediaTypeDef, Operation, Param, ResponseDef, Verb};

/// An operation with no params and no responses.
pub fn make_operation(path: &str, verb: Verb) -> Operation {
    Operation {
        path: path.to_string(),
        verb,
        server: "https://api.example.com".to_string(),
        positional_params: vec![],
        query_params: vec![],
        header_params: vec![],
        body_param: None,
        responses: vec![],
    }
}

pub fn make_param(name: &str, ty: &str, required: bool) -> Param {
    Param {
        name: name.to_string(),
        ty: ty.to_string(),
        required,
        description: None,
    }
}

pub fn make_body(ty: &str, media_type: &str) -> BodyParam {
    BodyParam {
        name: "body".to_string(),
        ty: ty.to_string(),
        required: true,
        description: None,
        media_type: media_type.to_string(),
    }
}

/// A response with `(media type, type)` pairs.
pub fn make_response(code: &str, media: &[(&str, &str)]) -> ResponseDef {
    ResponseDef {
        code: code.to_string(),
        media_types: media
            .iter()
            .map(|(media_type, ty)| MediaTypeDef {
                media_type: (*media_type).to_string(),
                ty: (*ty).to_string(),
            })
            .collect(),
    }
}
