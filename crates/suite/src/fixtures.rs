//! Canned catalog responses shared by the check tests

use probe::{StubReply, StubTransport};
use serde_json::{json, Value};

pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Cosmic Catalog - JWST &amp; Hubble Observations</title>
</head>
<body>
  <header><h1>🔭 Cosmic Catalog</h1></header>
  <section><h2>⭐ Featured Observations</h2></section>
</body>
</html>"#;

pub fn observation(id: u64, target: &str, score: u64) -> Value {
    json!({
        "id": id,
        "telescope": "JWST",
        "programId": "ERS-1324",
        "targetName": target,
        "ra": 161.265,
        "dec": -59.6844,
        "obsDate": "2024-08-12T03:21:00",
        "instrument": "NIRCam",
        "filters": "F200W,F444W",
        "exposureSec": 1200,
        "imageUrl": null,
        "score": score,
        "status": "APPROVED",
        "hasDontPanicBadge": score == 42
    })
}

pub fn import_summary() -> Value {
    json!({
        "source": "jwst_sample.json",
        "startedAt": "2024-09-01T11:00:00",
        "completedAt": "2024-09-01T11:00:02",
        "totalProcessed": 12,
        "duplicatesFound": 2,
        "imported": 10,
        "status": "SUCCEEDED",
        "notes": null
    })
}

pub fn page(content: Vec<Value>, size: u64, total: u64) -> Value {
    let total_pages = if size == 0 { 0 } else { total.div_ceil(size) };
    json!({
        "content": content,
        "pageable": {
            "pageNumber": 0,
            "pageSize": size,
            "sort": { "empty": true, "sorted": false, "unsorted": true },
            "offset": 0,
            "paged": true,
            "unpaged": false
        },
        "last": total_pages <= 1,
        "totalElements": total,
        "totalPages": total_pages,
        "size": size,
        "number": 0,
        "first": true,
        "numberOfElements": total.min(size),
        "empty": total == 0
    })
}

pub fn error_body(code: &str, status: u16, message: &str, path: &str) -> Value {
    json!({
        "error": code,
        "message": message,
        "status": status,
        "timestamp": "2024-09-01T12:00:00",
        "path": path
    })
}

/// A catalog that answers every check the way the real server does
pub fn healthy_catalog() -> StubTransport {
    StubTransport::new()
        .on_get("/", StubReply::html(200, HOME_PAGE))
        .on_post("/api/import/sample", StubReply::json(200, import_summary()))
        .on_get(
            "/api/featured?limit=2",
            StubReply::json(
                200,
                json!([observation(7, "Carina Nebula", 90), observation(3, "NGC 3132", 75)]),
            ),
        )
        .on_get(
            "/api/observations?size=1",
            StubReply::json(200, page(vec![observation(1, "SMACS 0723", 60)], 1, 10)),
        )
        .on_get(
            "/health",
            StubReply::json(
                200,
                json!({
                    "version": "1.0.0",
                    "counts": { "obs": 10, "targets": 6 },
                    "lastImport": "2024-09-01T12:00:00"
                }),
            ),
        )
        .on_get(
            "/openapi.yaml",
            StubReply::text(
                200,
                "openapi: 3.0.3\ninfo:\n  title: Cosmic Catalog API\npaths:\n  /api/import/sample: {}\n  /api/import/realistic: {}\n",
            ),
        )
        .on_get(
            "/api/featured?limit=0",
            StubReply::json(
                400,
                error_body(
                    "VALIDATION_ERROR",
                    400,
                    "Constraint violation: getFeatured.limit: Limit must be at least 1",
                    "/api/featured",
                ),
            ),
        )
        .on_post(
            "/api/observations/999999999/approve",
            StubReply::json(
                404,
                error_body(
                    "NOT_FOUND",
                    404,
                    "Observation not found with id: 999999999",
                    "/api/observations/999999999/approve",
                ),
            ),
        )
}
