use axum::{
    extract::Request,
    handler::Handler,
    http::{uri::PathAndQuery, Uri},
    routing::{get, MethodRouter},
    Router,
};
use tower::util::MapRequest;
use tower::ServiceBuilder;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{self, AppState};

/// Router wrapped in the path normalisation applied before routing
pub type App = NormalizePath<MapRequest<Router, fn(Request) -> Request>>;

/// Route listing shown in the startup banner, grouped by kind of query.
pub const ROUTE_GROUPS: &[(&str, &[&str])] = &[
    (
        "BASIC FETCH",
        &[
            "/api/students",
            "/api/students/:id",
            "/api/instructors",
            "/api/instructors/:id",
            "/api/courses",
            "/api/courses/:id",
            "/api/enrollments",
            "/api/enrollments/:id",
            "/api/assignments",
            "/api/assignments/:id",
            "/api/grades",
            "/api/grades/:id",
        ],
    ),
    (
        "NESTED RESOURCES",
        &[
            "/api/students/:id/enrollments",
            "/api/students/:id/courses",
            "/api/courses/:id/students",
            "/api/instructors/:id/courses",
            "/api/courses/:id/assignments",
            "/api/enrollments/:id/grades",
        ],
    ),
    (
        "ADVANCED QUERIES",
        &[
            "/api/students/:id/gpa",
            "/api/courses/:id/average",
            "/api/instructors/:id/students",
            "/api/students/:id/schedule",
        ],
    ),
    ("UTILITY", &["/api/health"]),
];

/// GET route; any other method gets the same JSON 404 as an unknown path.
fn read<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(handlers::route_not_found)
}

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", read(handlers::health_check))
        // Students
        .route("/api/students", read(handlers::list_students))
        .route("/api/students/:id", read(handlers::get_student))
        .route(
            "/api/students/:id/enrollments",
            read(handlers::get_student_enrollments),
        )
        .route("/api/students/:id/courses", read(handlers::get_student_courses))
        .route("/api/students/:id/gpa", read(handlers::get_student_gpa))
        .route("/api/students/:id/schedule", read(handlers::get_student_schedule))
        // Instructors
        .route("/api/instructors", read(handlers::list_instructors))
        .route("/api/instructors/:id", read(handlers::get_instructor))
        .route(
            "/api/instructors/:id/courses",
            read(handlers::get_instructor_courses),
        )
        .route(
            "/api/instructors/:id/students",
            read(handlers::get_instructor_students),
        )
        // Courses
        .route("/api/courses", read(handlers::list_courses))
        .route("/api/courses/:id", read(handlers::get_course))
        .route("/api/courses/:id/students", read(handlers::get_course_students))
        .route(
            "/api/courses/:id/assignments",
            read(handlers::get_course_assignments),
        )
        .route("/api/courses/:id/average", read(handlers::get_course_average))
        // Enrollments
        .route("/api/enrollments", read(handlers::list_enrollments))
        .route("/api/enrollments/:id", read(handlers::get_enrollment))
        .route(
            "/api/enrollments/:id/grades",
            read(handlers::get_enrollment_grades),
        )
        // Assignments
        .route("/api/assignments", read(handlers::list_assignments))
        .route("/api/assignments/:id", read(handlers::get_assignment))
        // Grades
        .route("/api/grades", read(handlers::list_grades))
        .route("/api/grades/:id", read(handlers::get_grade))
        .fallback(handlers::route_not_found)
}

/// Full application: trailing slashes trimmed and route segments matched
/// case-insensitively, then dispatched by `create_router`.
pub fn create_app(state: AppState) -> App {
    ServiceBuilder::new()
        .layer(NormalizePathLayer::trim_trailing_slash())
        .map_request(fold_route_case as fn(Request) -> Request)
        .service(create_router().with_state(state))
}

/// Lower-cases the literal segments of an `/api/{kind}/{id}/{relation}` path.
/// The id segment keeps its case.
pub fn fold_route_case(mut request: Request) -> Request {
    let path = request.uri().path();
    let folded = path
        .split('/')
        .enumerate()
        .map(|(index, segment)| match index {
            1 | 2 | 4 => segment.to_ascii_lowercase(),
            _ => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/");
    if folded == path {
        return request;
    }

    let path_and_query = match request.uri().query() {
        Some(query) => format!("{}?{}", folded, query),
        None => folded,
    };
    let mut parts = request.uri().clone().into_parts();
    if let Ok(path_and_query) = PathAndQuery::try_from(path_and_query) {
        parts.path_and_query = Some(path_and_query);
        if let Ok(uri) = Uri::from_parts(parts) {
            *request.uri_mut() = uri;
        }
    }
    request
}

/// Startup banner listing the bound address and every route.
pub fn route_banner(address: &str) -> String {
    let mut banner = format!("Server running on http://{}\n", address);
    for (group, routes) in ROUTE_GROUPS {
        banner.push_str(&format!("\n=== {} ===\n", group));
        for route in routes.iter() {
            banner.push_str(&format!("  GET {}\n", route));
        }
    }
    banner
}
