//! Briefing Assembler (Use Case)
//!
//! Fans out the profile, posts and weather lookups concurrently and merges
//! them into a [`BriefingResult`]. Only a missing user is fatal; posts and
//! weather degrade to their placeholder markers.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::{BriefingError, BriefingRequest, BriefingResult, DomainError};
use crate::ports::{UserDirectory, WeatherProvider};

/// Application service producing briefings
pub struct BriefingAssembler {
    directory: Arc<dyn UserDirectory>,
    weather: Arc<dyn WeatherProvider>,
}

impl BriefingAssembler {
    pub fn new(directory: Arc<dyn UserDirectory>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { directory, weather }
    }

    /// Assemble a briefing for a validated request.
    ///
    /// All three lookups are launched before any of them is awaited, so the
    /// latency is that of the slowest one. The profile is resolved first; if
    /// it is missing or its lookup failed the other two are aborted and
    /// [`BriefingError::UserNotFound`] is returned.
    pub async fn assemble(&self, request: &BriefingRequest) -> Result<BriefingResult, BriefingError> {
        let user_id = request.user_id();
        let city = request.city();

        tracing::info!(user_id, city, "Assembling briefing");

        let profile_task = {
            let directory = Arc::clone(&self.directory);
            tokio::spawn(async move { directory.get_profile(user_id).await })
        };
        let posts_task = {
            let directory = Arc::clone(&self.directory);
            tokio::spawn(async move { directory.get_recent_posts(user_id).await })
        };
        let weather_task = {
            let weather = Arc::clone(&self.weather);
            let city = city.to_string();
            tokio::spawn(async move { weather.get_weather(&city).await })
        };

        let Some(profile) = settle(profile_task, "profile").await.flatten() else {
            posts_task.abort();
            weather_task.abort();
            tracing::warn!(user_id, "User not found, briefing aborted");
            return Err(BriefingError::UserNotFound(user_id));
        };

        // No sorting: the directory decides what "latest" means.
        let latest_post_title = settle(posts_task, "posts")
            .await
            .and_then(|posts| posts.into_iter().next())
            .map(|post| post.title)
            .filter(|title| !title.is_empty());

        let weather = settle(weather_task, "weather").await.flatten();

        tracing::info!(
            user_id,
            city,
            has_weather = weather.is_some(),
            has_post = latest_post_title.is_some(),
            "Briefing assembled"
        );

        Ok(BriefingResult {
            user_name: profile.display_name().to_string(),
            city: city.to_string(),
            weather,
            latest_post_title,
            error_message: None,
        })
    }
}

/// Await a lookup task, turning every failure into `None`
async fn settle<T>(task: JoinHandle<Result<T, DomainError>>, lookup: &'static str) -> Option<T> {
    match task.await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            tracing::warn!(lookup, error = %e, "Upstream lookup failed");
            None
        }
        Err(e) => {
            tracing::warn!(lookup, error = %e, "Upstream lookup task did not complete");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Barrier;

    use crate::domain::{Post, UserProfile, WeatherSnapshot, NO_POSTS_MARKER, WEATHER_UNAVAILABLE_MARKER};

    #[derive(Default)]
    struct FakeDirectory {
        profile: Option<UserProfile>,
        posts: Vec<Post>,
        fail_profile: bool,
        fail_posts: bool,
        profile_calls: AtomicUsize,
    }

    #[async_trait]
    impl UserDirectory for FakeDirectory {
        async fn get_profile(&self, _user_id: i64) -> Result<Option<UserProfile>, DomainError> {
            self.profile_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_profile {
                return Err(DomainError::ExternalService("connection refused".to_string()));
            }
            Ok(self.profile.clone())
        }

        async fn get_recent_posts(&self, _user_id: i64) -> Result<Vec<Post>, DomainError> {
            if self.fail_posts {
                return Err(DomainError::ExternalService("timed out".to_string()));
            }
            Ok(self.posts.clone())
        }
    }

    #[derive(Default)]
    struct FakeWeather {
        snapshot: Option<WeatherSnapshot>,
        fail: bool,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WeatherProvider for FakeWeather {
        async fn get_weather(&self, location: &str) -> Result<Option<WeatherSnapshot>, DomainError> {
            self.requested.lock().unwrap().push(location.to_string());
            if self.fail {
                return Err(DomainError::ExternalService("malformed payload".to_string()));
            }
            Ok(self.snapshot.clone())
        }
    }

    fn wroclaw_weather() -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Wrocław".to_string(),
            temperature: 15.5,
            feels_like: 14.0,
            description: "cloudy".to_string(),
            icon_code: "01d".to_string(),
        }
    }

    fn build(directory: FakeDirectory, weather: FakeWeather) -> (BriefingAssembler, Arc<FakeDirectory>, Arc<FakeWeather>) {
        let directory = Arc::new(directory);
        let weather = Arc::new(weather);
        (
            BriefingAssembler::new(directory.clone(), weather.clone()),
            directory,
            weather,
        )
    }

    #[tokio::test]
    async fn test_full_briefing() {
        let (assembler, _, weather) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(1, "Thomas Moore")),
                posts: vec![Post::new(10, 1, "Latest Post Title")],
                ..Default::default()
            },
            FakeWeather {
                snapshot: Some(wroclaw_weather()),
                ..Default::default()
            },
        );

        let request = BriefingRequest::new(1, "Wrocław").unwrap();
        let result = assembler.assemble(&request).await.unwrap();

        assert_eq!(result.user_name, "Thomas Moore");
        assert_eq!(result.city, "Wrocław");
        assert_eq!(result.latest_post_title.as_deref(), Some("Latest Post Title"));
        assert!(result.weather_summary().contains("cloudy"));
        assert!(result.weather_summary().contains("feels like 14.0°C"));
        assert_eq!(result.error_message, None);
        assert_eq!(
            result.to_string(),
            "Good morning, Thomas Moore! The current weather in Wrocław is cloudy. \
             It's 15.5°C. Your latest post is titled: 'Latest Post Title'."
        );
        assert_eq!(*weather.requested.lock().unwrap(), vec!["Wrocław".to_string()]);
    }

    #[tokio::test]
    async fn test_user_not_found() {
        let (assembler, directory, _) = build(
            FakeDirectory {
                posts: vec![Post::new(10, 999, "Orphan")],
                ..Default::default()
            },
            FakeWeather {
                snapshot: Some(wroclaw_weather()),
                ..Default::default()
            },
        );

        let request = BriefingRequest::new(999, "Nonexistent").unwrap();
        let err = assembler.assemble(&request).await.unwrap_err();

        assert_eq!(err, BriefingError::UserNotFound(999));
        assert_eq!(err.to_string(), "User with ID 999 not found.");
        assert_eq!(directory.profile_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_profile_failure_is_user_not_found() {
        let (assembler, _, _) = build(
            FakeDirectory {
                fail_profile: true,
                fail_posts: true,
                ..Default::default()
            },
            FakeWeather {
                fail: true,
                ..Default::default()
            },
        );

        let request = BriefingRequest::new(7, "Gdańsk").unwrap();
        assert_eq!(
            assembler.assemble(&request).await.unwrap_err(),
            BriefingError::UserNotFound(7)
        );
    }

    #[tokio::test]
    async fn test_graceful_degradation_on_empty_posts_and_missing_weather() {
        let (assembler, _, _) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(2, "Ervin Howell")),
                ..Default::default()
            },
            FakeWeather::default(),
        );

        let request = BriefingRequest::new(2, "Gdańsk").unwrap();
        let result = assembler.assemble(&request).await.unwrap();

        assert_eq!(result.user_name, "Ervin Howell");
        assert_eq!(result.latest_post_title_or_marker(), NO_POSTS_MARKER);
        assert_eq!(result.weather_summary(), WEATHER_UNAVAILABLE_MARKER);

        let rendered = result.to_string();
        assert!(rendered.contains("no new posts"));
        assert!(rendered.contains("weather information"));
    }

    #[tokio::test]
    async fn test_upstream_errors_are_absorbed() {
        let (assembler, _, _) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(3, "Clementine Bauch")),
                fail_posts: true,
                ..Default::default()
            },
            FakeWeather {
                fail: true,
                ..Default::default()
            },
        );

        let request = BriefingRequest::new(3, "Kraków").unwrap();
        let result = assembler.assemble(&request).await.unwrap();

        assert_eq!(result.weather, None);
        assert_eq!(result.latest_post_title, None);
        assert_eq!(result.error_message, None);
    }

    #[tokio::test]
    async fn test_weather_failure_keeps_post_and_vice_versa() {
        let (assembler, _, _) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(4, "Patricia Lebsack")),
                posts: vec![Post::new(31, 4, "ullam ut quidem")],
                ..Default::default()
            },
            FakeWeather {
                fail: true,
                ..Default::default()
            },
        );
        let request = BriefingRequest::new(4, "Poznań").unwrap();
        let result = assembler.assemble(&request).await.unwrap();
        assert_eq!(result.latest_post_title.as_deref(), Some("ullam ut quidem"));
        assert_eq!(result.weather, None);

        let (assembler, _, _) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(4, "Patricia Lebsack")),
                fail_posts: true,
                ..Default::default()
            },
            FakeWeather {
                snapshot: Some(wroclaw_weather()),
                ..Default::default()
            },
        );
        let result = assembler.assemble(&request).await.unwrap();
        assert_eq!(result.latest_post_title, None);
        assert!(result.weather.is_some());
    }

    #[tokio::test]
    async fn test_first_post_wins_without_sorting() {
        let (assembler, _, _) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(1, "Thomas Moore")),
                posts: vec![
                    Post::new(1, 1, "first in upstream order"),
                    Post::new(99, 1, "higher id"),
                ],
                ..Default::default()
            },
            FakeWeather::default(),
        );

        let request = BriefingRequest::new(1, "Wrocław").unwrap();
        let result = assembler.assemble(&request).await.unwrap();
        assert_eq!(
            result.latest_post_title.as_deref(),
            Some("first in upstream order")
        );
    }

    #[tokio::test]
    async fn test_city_is_echoed_verbatim() {
        let (assembler, _, _) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(1, "Thomas Moore")),
                ..Default::default()
            },
            FakeWeather {
                snapshot: Some(wroclaw_weather()),
                ..Default::default()
            },
        );

        let request = BriefingRequest::new(1, "wroclaw").unwrap();
        let result = assembler.assemble(&request).await.unwrap();

        assert_eq!(result.city, "wroclaw");
        assert!(result.weather_summary().starts_with("The current weather in Wrocław"));
    }

    #[tokio::test]
    async fn test_nameless_profile_is_greeted_generically() {
        let (assembler, _, _) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(5, "")),
                ..Default::default()
            },
            FakeWeather::default(),
        );

        let request = BriefingRequest::new(5, "Łódź").unwrap();
        let result = assembler.assemble(&request).await.unwrap();
        assert_eq!(result.user_name, "there");
    }

    #[tokio::test]
    async fn test_assemble_is_idempotent() {
        let (assembler, _, _) = build(
            FakeDirectory {
                profile: Some(UserProfile::new(1, "Thomas Moore")),
                posts: vec![Post::new(10, 1, "Latest Post Title")],
                ..Default::default()
            },
            FakeWeather {
                snapshot: Some(wroclaw_weather()),
                ..Default::default()
            },
        );

        let request = BriefingRequest::new(1, "Wrocław").unwrap();
        let first = assembler.assemble(&request).await.unwrap();
        let second = assembler.assemble(&request).await.unwrap();
        assert_eq!(first, second);
    }

    /// Every lookup blocks until all three are in flight.
    struct RendezvousDirectory(Arc<Barrier>);

    #[async_trait]
    impl UserDirectory for RendezvousDirectory {
        async fn get_profile(&self, user_id: i64) -> Result<Option<UserProfile>, DomainError> {
            self.0.wait().await;
            Ok(Some(UserProfile::new(user_id, "Thomas Moore")))
        }

        async fn get_recent_posts(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
            self.0.wait().await;
            Ok(vec![Post::new(1, user_id, "Latest Post Title")])
        }
    }

    struct RendezvousWeather(Arc<Barrier>);

    #[async_trait]
    impl WeatherProvider for RendezvousWeather {
        async fn get_weather(&self, _location: &str) -> Result<Option<WeatherSnapshot>, DomainError> {
            self.0.wait().await;
            Ok(Some(wroclaw_weather()))
        }
    }

    #[tokio::test]
    async fn test_lookups_run_concurrently() {
        let barrier = Arc::new(Barrier::new(3));
        let assembler = BriefingAssembler::new(
            Arc::new(RendezvousDirectory(barrier.clone())),
            Arc::new(RendezvousWeather(barrier)),
        );

        let request = BriefingRequest::new(1, "Wrocław").unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), assembler.assemble(&request))
            .await
            .expect("lookups were not in flight at the same time")
            .unwrap();

        assert_eq!(result.latest_post_title.as_deref(), Some("Latest Post Title"));
        assert!(result.weather.is_some());
    }
}
