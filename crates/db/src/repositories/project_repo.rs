//! Repository for the `projects` table.

use showreel_core::reorder::ReorderEntry;
use showreel_core::team::{clean_team, TeamMember};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, client, description, video_url, thumbnail, \
    image1, image2, image3, team, color, display_order, published, created_at, updated_at";

/// Rank order with a deterministic tie-break for duplicate ranks.
const RANK_ORDER: &str = "ORDER BY display_order ASC, created_at ASC, id ASC";

/// Selection options for [`ProjectRepo::list`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Only return rows with `published = true`.
    pub published_only: bool,
    /// Sort ascending by rank. Without it the row order is unspecified.
    pub sort_by_order: bool,
}

impl ProjectFilter {
    /// Published rows in rank order, as shown on the public site.
    pub fn public() -> Self {
        Self {
            published_only: true,
            sort_by_order: true,
        }
    }

    /// Every row in rank order, as shown in the admin list.
    pub fn admin() -> Self {
        Self {
            published_only: false,
            sort_by_order: true,
        }
    }
}

/// Whether the `projects` table exists and how many rows it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStatus {
    pub table_exists: bool,
    pub project_count: i64,
}

fn cleaned(team: Option<&[TeamMember]>) -> Option<Vec<TeamMember>> {
    team.map(clean_team)
}

/// Provides CRUD and reorder operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a freshly generated id, returning the created row.
    ///
    /// A duplicate slug fails with a unique violation on `uq_projects_slug`.
    /// A blank title or slug fails the `ck_projects_*_not_blank` checks.
    /// Team credits are stored cleaned of blank names and empty members.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let team = cleaned(input.team.as_deref());
        let id = uuid::Uuid::now_v7().to_string();
        let query = format!(
            "INSERT INTO projects (
                id, slug, title, client, description, video_url, thumbnail,
                image1, image2, image3, team, color, display_order, published
             ) VALUES (
                $1, $2, $3, COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''),
                COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''), COALESCE($10, ''),
                COALESCE($11, '[]'::jsonb), COALESCE(NULLIF($12, ''), '#ff6b35'),
                COALESCE($13, 0), COALESCE($14, true)
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.client)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(&input.thumbnail)
            .bind(&input.image1)
            .bind(&input.image2)
            .bind(&input.image3)
            .bind(team.map(Json))
            .bind(&input.color)
            .bind(input.order)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id, published or not.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by slug, optionally restricted to published rows.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = if published_only {
            format!("SELECT {COLUMNS} FROM projects WHERE slug = $1 AND published = true LIMIT 1")
        } else {
            format!("SELECT {COLUMNS} FROM projects WHERE slug = $1 LIMIT 1")
        };
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching `filter`.
    pub async fn list(pool: &PgPool, filter: ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let mut query = format!("SELECT {COLUMNS} FROM projects");
        if filter.published_only {
            query.push_str(" WHERE published = true");
        }
        if filter.sort_by_order {
            query.push(' ');
            query.push_str(RANK_ORDER);
        }
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only `Some` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists. The same checks
    /// as [`ProjectRepo::create`] apply to replaced values.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let team = cleaned(input.team.as_deref());
        let query = format!(
            "UPDATE projects SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                client = COALESCE($4, client),
                description = COALESCE($5, description),
                video_url = COALESCE($6, video_url),
                thumbnail = COALESCE($7, thumbnail),
                image1 = COALESCE($8, image1),
                image2 = COALESCE($9, image2),
                image3 = COALESCE($10, image3),
                team = COALESCE($11, team),
                color = COALESCE($12, color),
                display_order = COALESCE($13, display_order),
                published = COALESCE($14, published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.client)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(&input.thumbnail)
            .bind(&input.image1)
            .bind(&input.image2)
            .bind(&input.image3)
            .bind(team.map(Json))
            .bind(&input.color)
            .bind(input.order)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a batch of rank assignments, one row at a time.
    ///
    /// Each row update is its own statement; the batch as a whole is not
    /// atomic. Unknown ids are skipped. Returns the number of rows touched.
    pub async fn reorder(pool: &PgPool, updates: &[ReorderEntry]) -> Result<u64, sqlx::Error> {
        let mut touched = 0;
        for entry in updates {
            let result = sqlx::query(
                "UPDATE projects SET display_order = $1, updated_at = NOW() WHERE id = $2",
            )
            .bind(entry.order)
            .bind(&entry.id)
            .execute(pool)
            .await?;
            touched += result.rows_affected();
        }
        if touched < updates.len() as u64 {
            tracing::debug!(
                requested = updates.len(),
                touched,
                "Reorder batch referenced unknown project ids"
            );
        }
        Ok(touched)
    }

    /// Report whether the `projects` table exists and its row count.
    pub async fn table_status(pool: &PgPool) -> Result<TableStatus, sqlx::Error> {
        let (table_exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = 'projects'
             )",
        )
        .fetch_one(pool)
        .await?;

        if !table_exists {
            return Ok(TableStatus {
                table_exists,
                project_count: 0,
            });
        }

        let (project_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(TableStatus {
            table_exists,
            project_count,
        })
    }
}
