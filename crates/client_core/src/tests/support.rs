use async_trait::async_trait;
use shared::domain::{Course, CourseId, CourseInput};
use tokio::sync::Mutex;

use crate::{CourseRepository, RepositoryError};

pub(crate) fn course(id: i64, name: &str, teacher: &str) -> Course {
    Course {
        id: CourseId::from(id),
        name: name.to_string(),
        credit: 3.0,
        category: "Đại cương".to_string(),
        teacher: teacher.to_string(),
    }
}

pub(crate) fn id_of(course: &Course) -> i64 {
    course.id.as_i64().expect("numeric test id")
}

/// Courses `1..=count`, named "Course N", taught by "Teacher A" or "Teacher B"
/// alternately.
pub(crate) fn numbered_courses(count: i64) -> Vec<Course> {
    (1..=count)
        .map(|id| {
            let teacher = if id % 2 == 1 { "Teacher A" } else { "Teacher B" };
            course(id, &format!("Course {id}"), teacher)
        })
        .collect()
}

pub(crate) fn valid_input() -> CourseInput {
    CourseInput {
        name: "Giải tích Toán 1".into(),
        credit: 3.0,
        category: "Đại cương".into(),
        teacher: "Nguyễn A".into(),
    }
}

/// In-memory repository that records calls and can be told to fail.
pub(crate) struct FakeRepository {
    pub courses: Mutex<Vec<Course>>,
    pub deleted: Mutex<Vec<CourseId>>,
    pub created: Mutex<Vec<CourseInput>>,
    pub updated: Mutex<Vec<(CourseId, CourseInput)>>,
    fail_with: Mutex<Option<RepositoryError>>,
}

impl FakeRepository {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(courses),
            deleted: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    pub fn failing(err: RepositoryError) -> Self {
        let repo = Self::with_courses(Vec::new());
        *repo.fail_with.try_lock().expect("fresh mutex") = Some(err);
        repo
    }

    /// Every later call fails with `err`.
    pub async fn fail_with(&self, err: RepositoryError) {
        *self.fail_with.lock().await = Some(err);
    }

    async fn check_failure(&self) -> Result<(), RepositoryError> {
        match self.fail_with.lock().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CourseRepository for FakeRepository {
    async fn fetch_all(&self) -> Result<Vec<Course>, RepositoryError> {
        self.check_failure().await?;
        Ok(self.courses.lock().await.clone())
    }

    async fn fetch(&self, id: CourseId) -> Result<Course, RepositoryError> {
        self.check_failure().await?;
        self.courses
            .lock()
            .await
            .iter()
            .find(|course| course.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, input: CourseInput) -> Result<Course, RepositoryError> {
        self.check_failure().await?;
        self.created.lock().await.push(input.clone());
        let mut courses = self.courses.lock().await;
        let id = courses
            .iter()
            .filter_map(|course| course.id.as_i64())
            .max()
            .unwrap_or(0)
            + 1;
        let course = Course {
            id: CourseId::from(id),
            name: input.name,
            credit: input.credit,
            category: input.category,
            teacher: input.teacher,
        };
        courses.push(course.clone());
        Ok(course)
    }

    async fn update(&self, id: CourseId, input: CourseInput) -> Result<Course, RepositoryError> {
        self.check_failure().await?;
        let mut courses = self.courses.lock().await;
        let stored = courses
            .iter_mut()
            .find(|course| course.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        stored.name = input.name.clone();
        stored.credit = input.credit;
        stored.category = input.category.clone();
        stored.teacher = input.teacher.clone();
        let updated = stored.clone();
        self.updated.lock().await.push((id, input));
        Ok(updated)
    }

    async fn delete(&self, id: CourseId) -> Result<(), RepositoryError> {
        self.check_failure().await?;
        let mut courses = self.courses.lock().await;
        let before = courses.len();
        courses.retain(|course| course.id != id);
        if courses.len() == before {
            return Err(RepositoryError::NotFound(id));
        }
        self.deleted.lock().await.push(id);
        Ok(())
    }
}
