//! Shared dataset for unit and integration tests.
//!
//! Two regions, three years, four events, six participants:
//! 1 + 2 + 3 + 4 + 6 = 16 routes.

use crate::models::DataStructure;

pub const SAMPLE_ROUTE_COUNT: usize = 16;

pub const SAMPLE_JSON: &str = r#"{
  "regions": [
    {
      "name": "Taipei",
      "years": [
        {
          "year": 2023,
          "events": [
            {
              "id": "winter-crit",
              "title": "Winter Criterium",
              "summary": "Night race around the arena",
              "date": "2023-12-02",
              "participants": []
            }
          ]
        },
        {
          "year": 2024,
          "events": [
            {
              "id": "abc",
              "title": "Yangmingshan Climb",
              "summary": "Hill climb to Xiaoyoukeng",
              "date": "2024-04-20",
              "location": "Yangmingshan",
              "description": "Timed climb from the Shilin foothills.",
              "ld_json": {"@context": "https://schema.org", "@type": "SportsEvent", "name": "Yangmingshan Climb"},
              "participants": [
                {"id": "xyz", "name": "Lin Wei", "detail": {"age": 31, "category": "Men Open", "city": "Taipei", "phone": "0912-000-111", "email": "wei@example.com"}},
                {"id": "p2", "name": "Chen Yu", "detail": {"age": 27, "category": "Women Open", "email": "yu@example.com"}},
                {"id": "p3", "name": "Huang Jie", "detail": {"age": 45, "category": "Men Open"}}
              ]
            },
            {
              "id": "spring-ride",
              "title": "Spring Riverside Ride",
              "summary": "Family ride along the Tamsui river",
              "date": "2024-03-10",
              "participants": [
                {"id": "p4", "name": "Wu Ting", "detail": {"age": 12, "category": "Youth"}}
              ]
            }
          ]
        }
      ]
    },
    {
      "name": "New Taipei",
      "years": [
        {
          "year": 2024,
          "events": [
            {
              "id": "river-loop",
              "title": "River Loop",
              "summary": "Loop of the Dahan and Xindian rivers",
              "date": "2024-05-05",
              "participants": [
                {"id": "p5", "name": "Tsai Min", "detail": {"age": 38, "category": "Masters"}},
                {"id": "p6", "name": "Lee Hao", "detail": {"age": 22, "category": "Men Open", "city": "Banqiao"}}
              ]
            }
          ]
        }
      ]
    }
  ],
  "latest_events": [
    {"event_id": "river-loop", "title": "River Loop", "summary": "Loop", "date": "2024-05-05", "region": "New Taipei", "year": 2024},
    {"event_id": "abc", "title": "Old climb title", "summary": "Stale summary", "date": "2024-01-01", "region": "Taipei", "year": 2024},
    {"event_id": "abc", "title": "No region", "summary": "s", "date": "2024-04-20", "year": 2024},
    {"event_id": "gone", "title": "Deleted event", "summary": "s", "date": "2024-02-02", "region": "Taipei", "year": 2024}
  ],
  "last_updated": "2024-05-06T09:30:00Z"
}"#;

pub fn sample_data() -> DataStructure {
    serde_json::from_str(SAMPLE_JSON).expect("sample dataset parses")
}
