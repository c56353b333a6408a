//! Static template catalog
//!
//! Pure lookup from a resolved `ProjectConfig` to the ordered list of files
//! to generate, plus the substitution context. Variant selection (view
//! style, database, docker) happens here; nothing in this module touches the
//! filesystem.

use super::render::{render, RenderContext};
use super::FileSpec;
use crate::config::{Database, ProjectConfig, ProjectType, ViewStyle};

/// Files generated for every configuration
const BASE_FILES: &[FileSpec] = &[
    FileSpec {
        path: "manage.py",
        body: include_str!("../../templates/manage.py.tmpl"),
    },
    FileSpec {
        path: "requirements.txt",
        body: include_str!("../../templates/requirements.txt.tmpl"),
    },
    FileSpec {
        path: ".env.example",
        body: include_str!("../../templates/env.example.tmpl"),
    },
    FileSpec {
        path: ".gitignore",
        body: include_str!("../../templates/gitignore.tmpl"),
    },
    FileSpec {
        path: "{{ project_name }}/__init__.py",
        body: "",
    },
    FileSpec {
        path: "{{ project_name }}/settings.py",
        body: include_str!("../../templates/project/settings.py.tmpl"),
    },
    FileSpec {
        path: "{{ project_name }}/urls.py",
        body: include_str!("../../templates/project/urls.py.tmpl"),
    },
    FileSpec {
        path: "{{ project_name }}/wsgi.py",
        body: include_str!("../../templates/project/wsgi.py.tmpl"),
    },
    FileSpec {
        path: "{{ project_name }}/asgi.py",
        body: include_str!("../../templates/project/asgi.py.tmpl"),
    },
    FileSpec {
        path: "{{ app_name }}/__init__.py",
        body: "",
    },
    FileSpec {
        path: "{{ app_name }}/admin.py",
        body: include_str!("../../templates/app/admin.py.tmpl"),
    },
    FileSpec {
        path: "{{ app_name }}/apps.py",
        body: include_str!("../../templates/app/apps.py.tmpl"),
    },
    FileSpec {
        path: "{{ app_name }}/models.py",
        body: include_str!("../../templates/app/models.py.tmpl"),
    },
    FileSpec {
        path: "{{ app_name }}/tests.py",
        body: include_str!("../../templates/app/tests.py.tmpl"),
    },
];

/// MVP-only files (forms, HTML templates, static assets)
const MVP_FILES: &[FileSpec] = &[
    FileSpec {
        path: "{{ app_name }}/forms.py",
        body: include_str!("../../templates/app/forms.py.tmpl"),
    },
    FileSpec {
        path: "{{ app_name }}/templates/{{ app_name }}/base.html",
        body: include_str!("../../templates/html/base.html.tmpl"),
    },
    FileSpec {
        path: "{{ app_name }}/templates/{{ app_name }}/home.html",
        body: include_str!("../../templates/html/home.html.tmpl"),
    },
    FileSpec {
        path: "{{ app_name }}/templates/{{ app_name }}/about.html",
        body: include_str!("../../templates/html/about.html.tmpl"),
    },
    FileSpec {
        path: "static/css/style.css",
        body: include_str!("../../templates/static/style.css.tmpl"),
    },
];

/// API-only files
const API_FILES: &[FileSpec] = &[FileSpec {
    path: "{{ app_name }}/serializers.py",
    body: include_str!("../../templates/app/serializers.py.tmpl"),
}];

/// Docker files independent of database choice
const DOCKER_FILES: &[FileSpec] = &[
    FileSpec {
        path: "Dockerfile",
        body: include_str!("../../templates/docker/Dockerfile.tmpl"),
    },
    FileSpec {
        path: ".dockerignore",
        body: include_str!("../../templates/docker/dockerignore.tmpl"),
    },
];

const COMPOSE_SQLITE: FileSpec = FileSpec {
    path: "docker-compose.yml",
    body: include_str!("../../templates/docker/docker-compose-sqlite.yml.tmpl"),
};

const COMPOSE_POSTGRES: FileSpec = FileSpec {
    path: "docker-compose.yml",
    body: include_str!("../../templates/docker/docker-compose-postgres.yml.tmpl"),
};

/// Waits for PostgreSQL and migrates before handing off to the CMD
const ENTRYPOINT: FileSpec = FileSpec {
    path: "entrypoint.sh",
    body: include_str!("../../templates/docker/entrypoint.sh.tmpl"),
};

/// views.py body, selected by (project type, view style)
fn views_file(project_type: ProjectType, views: ViewStyle) -> FileSpec {
    let body = match (project_type, views) {
        (ProjectType::Mvp, ViewStyle::Fbv) => {
            include_str!("../../templates/app/views_fbv.py.tmpl")
        }
        (ProjectType::Mvp, ViewStyle::Cbv) => {
            include_str!("../../templates/app/views_cbv.py.tmpl")
        }
        (ProjectType::Api, ViewStyle::Fbv) => {
            include_str!("../../templates/app/views_api_fbv.py.tmpl")
        }
        (ProjectType::Api, ViewStyle::Cbv) => {
            include_str!("../../templates/app/views_api_cbv.py.tmpl")
        }
    };
    FileSpec {
        path: "{{ app_name }}/views.py",
        body,
    }
}

/// App urls.py body, selected by (project type, view style)
fn urls_file(project_type: ProjectType, views: ViewStyle) -> FileSpec {
    let body = match (project_type, views) {
        (ProjectType::Mvp, ViewStyle::Fbv) => {
            include_str!("../../templates/app/urls_mvp_fbv.py.tmpl")
        }
        (ProjectType::Mvp, ViewStyle::Cbv) => {
            include_str!("../../templates/app/urls_mvp_cbv.py.tmpl")
        }
        (ProjectType::Api, ViewStyle::Fbv) => {
            include_str!("../../templates/app/urls_api_fbv.py.tmpl")
        }
        (ProjectType::Api, ViewStyle::Cbv) => {
            include_str!("../../templates/app/urls_api_cbv.py.tmpl")
        }
    };
    FileSpec {
        path: "{{ app_name }}/urls.py",
        body,
    }
}

/// Build the ordered file plan for a configuration
pub fn plan(config: &ProjectConfig) -> Vec<FileSpec> {
    let mut files = Vec::new();
    files.extend_from_slice(BASE_FILES);
    files.push(views_file(config.project_type, config.views));
    files.push(urls_file(config.project_type, config.views));

    match config.project_type {
        ProjectType::Mvp => files.extend_from_slice(MVP_FILES),
        ProjectType::Api => files.extend_from_slice(API_FILES),
    }

    if config.docker {
        files.extend_from_slice(DOCKER_FILES);
        files.push(match config.database {
            Database::Sqlite => COMPOSE_SQLITE,
            Database::Postgresql => COMPOSE_POSTGRES,
        });
        if config.database == Database::Postgresql {
            files.push(ENTRYPOINT);
        }
    }

    files
}

const SQLITE_SETTINGS: &str = r#"DATABASES = {
    "default": {
        "ENGINE": "django.db.backends.sqlite3",
        "NAME": BASE_DIR / "db.sqlite3",
    }
}"#;

const POSTGRES_SETTINGS: &str = r#"DATABASES = {
    "default": {
        "ENGINE": "django.db.backends.postgresql",
        "NAME": config("DB_NAME", default="{{ project_name }}"),
        "USER": config("DB_USER", default="postgres"),
        "PASSWORD": config("DB_PASSWORD", default="postgres"),
        "HOST": config("DB_HOST", default="localhost"),
        "PORT": config("DB_PORT", default="5432"),
    }
}"#;

const POSTGRES_ENV: &str = "DB_NAME={{ project_name }}
DB_USER=postgres
DB_PASSWORD=postgres
DB_HOST=localhost
DB_PORT=5432
";

const API_APPS: &str = "    \"rest_framework\",
    \"corsheaders\",
    \"django_filters\",
";

const API_MIDDLEWARE: &str = "    \"corsheaders.middleware.CorsMiddleware\",\n";

const API_SETTINGS: &str = r#"
REST_FRAMEWORK = {
    "DEFAULT_PAGINATION_CLASS": "rest_framework.pagination.PageNumberPagination",
    "PAGE_SIZE": 10,
    "DEFAULT_FILTER_BACKENDS": ["django_filters.rest_framework.DjangoFilterBackend"],
}

CORS_ALLOWED_ORIGINS = config(
    "CORS_ALLOWED_ORIGINS",
    default="http://localhost:3000",
    cast=Csv(),
)
"#;

const API_REQUIREMENTS: &str = "djangorestframework==3.15.2
django-cors-headers==4.6.0
django-filter==24.3
";

const POSTGRES_REQUIREMENTS: &str = "psycopg2-binary==2.9.10\n";

const DOCKER_REQUIREMENTS: &str = "gunicorn==23.0.0\n";

const STATIC_DIRS: &str = "STATICFILES_DIRS = [BASE_DIR / \"static\"]\n";

const DOCKERFILE_POSTGRES_DEPS: &str = "RUN apt-get update \\
    && apt-get install -y --no-install-recommends gcc libpq-dev \\
    && rm -rf /var/lib/apt/lists/*

";

const DOCKERFILE_ENTRYPOINT: &str = "RUN chmod +x /app/entrypoint.sh
ENTRYPOINT [\"/app/entrypoint.sh\"]

";

/// Build the substitution context for a configuration
///
/// Fragments that themselves mention the project name are pre-rendered here,
/// so the writer can apply the context in a single pass.
pub fn context(config: &ProjectConfig, secret_key: &str) -> RenderContext {
    let mut base = RenderContext::new();
    base.insert("project_name", config.name.clone());
    base.insert("app_name", config.app_name());
    base.insert("secret_key", secret_key);

    let is_api = config.project_type == ProjectType::Api;
    let is_postgres = config.database == Database::Postgresql;

    let mut ctx = base.clone();
    ctx.insert(
        "url_prefix",
        if is_api { "api/" } else { "" },
    );
    ctx.insert(
        "database_settings",
        render(
            if is_postgres {
                POSTGRES_SETTINGS
            } else {
                SQLITE_SETTINGS
            },
            &base,
        ),
    );
    ctx.insert(
        "database_env",
        if is_postgres {
            render(POSTGRES_ENV, &base)
        } else {
            String::new()
        },
    );
    ctx.insert("api_apps", if is_api { API_APPS } else { "" });
    ctx.insert("api_middleware", if is_api { API_MIDDLEWARE } else { "" });
    ctx.insert("api_settings", if is_api { API_SETTINGS } else { "" });
    ctx.insert(
        "api_requirements",
        if is_api { API_REQUIREMENTS } else { "" },
    );
    ctx.insert(
        "database_requirements",
        if is_postgres { POSTGRES_REQUIREMENTS } else { "" },
    );
    ctx.insert(
        "docker_requirements",
        if config.docker { DOCKER_REQUIREMENTS } else { "" },
    );
    ctx.insert(
        "static_dirs",
        if config.project_type == ProjectType::Mvp {
            STATIC_DIRS
        } else {
            ""
        },
    );
    ctx.insert(
        "dockerfile_system_deps",
        if is_postgres { DOCKERFILE_POSTGRES_DEPS } else { "" },
    );
    ctx.insert(
        "dockerfile_entrypoint",
        if config.docker && is_postgres {
            DOCKERFILE_ENTRYPOINT
        } else {
            ""
        },
    );

    ctx
}
