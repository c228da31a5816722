use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{EntityRefDto, ErrorDto},
        course::{CourseDto, CourseTypeDto},
        group::GroupDto,
        report::ParticipationDto,
        student::{StudentDto, UpsertStudentDto},
        teacher::{TeacherDto, UpsertTeacherDto},
    },
    server::{
        controller::{
            course::{self, COURSE_TAG},
            group::{self, GROUP_TAG},
            report::{self, REPORT_TAG},
            student::{self, STUDENT_TAG},
            teacher::{self, TEACHER_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "School Registry API"),
    paths(
        student::upsert_student,
        student::delete_student,
        student::get_students,
        student::count_students,
        teacher::upsert_teacher,
        teacher::delete_teacher,
        teacher::get_teachers,
        teacher::count_teachers,
        course::upsert_course,
        course::delete_course,
        course::get_courses,
        course::count_main_courses,
        course::count_secondary_courses,
        group::upsert_group,
        group::delete_group,
        group::get_groups,
        report::students_in_course,
        report::students_in_group,
        report::participation,
        report::students_older_than,
    ),
    components(schemas(
        CourseDto,
        CourseTypeDto,
        EntityRefDto,
        ErrorDto,
        GroupDto,
        ParticipationDto,
        StudentDto,
        TeacherDto,
        UpsertStudentDto,
        UpsertTeacherDto,
    )),
    tags(
        (name = STUDENT_TAG, description = "Students"),
        (name = TEACHER_TAG, description = "Teachers"),
        (name = COURSE_TAG, description = "Courses"),
        (name = GROUP_TAG, description = "Groups"),
        (name = REPORT_TAG, description = "Filtered reports over students and teachers"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/students/",
            post(student::upsert_student)
                .delete(student::delete_student)
                .get(student::get_students),
        )
        .route("/students/count", get(student::count_students))
        .route(
            "/teachers",
            post(teacher::upsert_teacher)
                .delete(teacher::delete_teacher)
                .get(teacher::get_teachers),
        )
        .route("/teachers/count", get(teacher::count_teachers))
        .route(
            "/courses",
            post(course::upsert_course)
                .delete(course::delete_course)
                .get(course::get_courses),
        )
        .route("/courses/main/count", get(course::count_main_courses))
        .route(
            "/courses/secondary/count",
            get(course::count_secondary_courses),
        )
        .route(
            "/groups",
            post(group::upsert_group)
                .delete(group::delete_group)
                .get(group::get_groups),
        )
        .route("/reports/studentsincourse", get(report::students_in_course))
        .route("/reports/studentsingroup", get(report::students_in_group))
        .route("/reports/participation", get(report::participation))
        .route("/reports/age", get(report::students_older_than))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
