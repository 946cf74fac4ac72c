//! Swagger 2.0 description of the HTTP API, served at `/docs.json`.

use serde_json::{json, Value};

pub fn api_description() -> Value {
    let pair = json!({
        "type": "object",
        "properties": {
            "Tweet": { "type": "string" },
            "Cleaned Tweet": { "type": "string" }
        }
    });
    let pairs = json!({ "type": "array", "items": pair });
    let error = json!({
        "description": "Invalid request",
        "schema": {
            "type": "object",
            "properties": { "error": { "type": "string" } }
        }
    });

    json!({
        "swagger": "2.0",
        "info": {
            "title": "Tweet Cleaning API",
            "description": "Normalizes tweets (slang substitution, profanity masking) and keeps a history",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/get": {
                "get": {
                    "summary": "List every stored tweet with its cleaned form",
                    "produces": ["application/json"],
                    "responses": { "200": { "description": "Stored pairs", "schema": pairs } }
                }
            },
            "/input": {
                "post": {
                    "summary": "Clean and store one tweet",
                    "consumes": ["application/json"],
                    "parameters": [{
                        "in": "body",
                        "name": "body",
                        "required": true,
                        "schema": {
                            "type": "object",
                            "required": ["Tweet"],
                            "properties": { "Tweet": { "type": "string" } }
                        }
                    }],
                    "responses": {
                        "200": { "description": "Cleaned pair", "schema": pair },
                        "400": error
                    }
                }
            },
            "/upload": {
                "post": {
                    "summary": "Clean and store every row of a CSV file with a Tweet column",
                    "consumes": ["text/csv"],
                    "parameters": [{
                        "in": "body",
                        "name": "file",
                        "required": true,
                        "schema": { "type": "string", "format": "binary" }
                    }],
                    "responses": {
                        "200": { "description": "Cleaned pairs in file order", "schema": pairs },
                        "400": error
                    }
                }
            },
            "/delete": {
                "delete": {
                    "summary": "Delete every stored tweet",
                    "responses": {
                        "200": {
                            "description": "Deletion status",
                            "schema": {
                                "type": "object",
                                "properties": { "Status": { "type": "string" } }
                            }
                        }
                    }
                }
            }
        }
    })
}
