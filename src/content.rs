//! Site content data model.
//!
//! All copy shown on the page lives here: the profile, skills, projects,
//! and social links. Content can be overridden at deploy time through a
//! `<script id="portfolio-data" type="application/json">` island in the
//! host page; anything missing falls back to the built-in defaults.

use serde::Deserialize;

/// Hero/about copy for the site owner.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	/// Typewriter tagline under the name.
	pub tagline: String,
	/// Role lines cycled in the hero section.
	pub roles: Vec<String>,
	pub bio: String,
	pub email: String,
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			name: "Sharaz Masih".into(),
			tagline: "Decoding Data, Unlocking Possibilities".into(),
			roles: vec![
				"I am a Web Developer".into(),
				"I am a Data Analyst".into(),
				"I am a Python Developer".into(),
			],
			bio: "Aspiring Data Scientist with expertise in programming, data analysis, \
			      and database management. Passionate about AI-driven solutions and \
			      predictive analytics."
				.into(),
			email: "contact@example.com".into(),
		}
	}
}

/// A named skill with a 0-100 proficiency level.
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
	pub name: String,
	pub level: u8,
}

/// A group of related skills shown as one card.
#[derive(Clone, Debug, Deserialize)]
pub struct SkillCategory {
	pub name: String,
	pub skills: Vec<Skill>,
}

/// A portfolio project card.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Project {
	pub title: String,
	pub description: String,
	/// Longer text shown in the detail modal.
	pub long_description: Option<String>,
	pub tech_stack: Vec<String>,
	pub image: Option<String>,
	/// When set, clicking the card opens this link instead of the modal.
	pub github: Option<String>,
}

/// An external profile link shown in the contact section and footer.
#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
	pub name: String,
	pub url: String,
}

/// Complete site content.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteContent {
	pub profile: Profile,
	/// Headline competencies shown with progress rings in the about section.
	pub competencies: Vec<Skill>,
	pub skill_categories: Vec<SkillCategory>,
	pub projects: Vec<Project>,
	pub social: Vec<SocialLink>,
}

impl Default for SiteContent {
	fn default() -> Self {
		let skill = |name: &str, level: u8| Skill {
			name: name.into(),
			level,
		};

		Self {
			profile: Profile::default(),
			competencies: vec![
				skill("Python", 90),
				skill("C++", 85),
				skill("Data Analysis", 92),
				skill("SQL", 88),
			],
			skill_categories: vec![
				SkillCategory {
					name: "Programming".into(),
					skills: vec![
						skill("Python", 90),
						skill("C++", 85),
						skill("JavaScript", 80),
						skill("R", 75),
					],
				},
				SkillCategory {
					name: "Data Analysis".into(),
					skills: vec![
						skill("Pandas", 92),
						skill("NumPy", 88),
						skill("Matplotlib", 85),
						skill("Tableau", 80),
					],
				},
				SkillCategory {
					name: "Database Management".into(),
					skills: vec![
						skill("SQL", 88),
						skill("MongoDB", 82),
						skill("PostgreSQL", 85),
						skill("Redis", 75),
					],
				},
				SkillCategory {
					name: "Software Development".into(),
					skills: vec![
						skill("Git", 90),
						skill("Docker", 80),
						skill("CI/CD", 78),
						skill("Agile", 85),
					],
				},
			],
			projects: vec![
				Project {
					title: "Flex Management System".into(),
					description: "A comprehensive management system built with C++ that uses \
					              object-oriented design for efficient data handling and text-file \
					              storage."
						.into(),
					long_description: Some(
						"Implements a management system in C++ around object-oriented design \
						 patterns, with user authentication, role-based access control, and \
						 file-backed persistence. Custom data structures keep performance \
						 predictable on large datasets."
							.into(),
					),
					tech_stack: vec!["C++".into(), "OOP".into(), "Text Files".into()],
					image: Some("/images/flex.jpg".into()),
					github: Some("https://github.com/yourusername/flex-management-system".into()),
				},
				Project {
					title: "Election Management System".into(),
					description: "Desktop application for comprehensive election data management \
					              with role-based access control and tracking."
						.into(),
					long_description: Some(
						"A secure election management system for voter data, built with C# and \
						 the .NET Framework over Oracle DB. Role-based access control and \
						 SQL/PL-SQL-backed operations keep election tracking auditable."
							.into(),
					),
					tech_stack: vec![
						"C#".into(),
						".NET Framework".into(),
						"Oracle DB".into(),
						"SQL".into(),
					],
					image: Some("/images/voting.jpg".into()),
					github: None,
				},
				Project {
					title: "DODGE-EM Game".into(),
					description: "Console racing game: collect rewards while dodging opponent \
					              cars. Collisions cost lives; score and lives render live."
						.into(),
					long_description: None,
					tech_stack: vec![
						"C++".into(),
						"Console".into(),
						"Data Structures".into(),
						"Algorithms".into(),
					],
					image: Some("/images/dodge-em.png".into()),
					github: Some("https://github.com/yourusername/dodge-em".into()),
				},
				Project {
					title: "English Dictionary".into(),
					description: "Console dictionary with trie-based word suggestions, efficient \
					              text storage, and customizable display."
						.into(),
					long_description: None,
					tech_stack: vec![
						"C++".into(),
						"Trie Trees".into(),
						"Stack".into(),
						"Algorithms".into(),
					],
					image: Some("/images/dictionary.png".into()),
					github: Some("https://github.com/yourusername/english-dictionary".into()),
				},
			],
			social: vec![
				SocialLink {
					name: "GitHub".into(),
					url: "https://github.com/Sharazsony".into(),
				},
				SocialLink {
					name: "LinkedIn".into(),
					url: "https://www.linkedin.com/in/sharaz-soni-542381313".into(),
				},
				SocialLink {
					name: "Email".into(),
					url: "mailto:sharazsony@gmail.com".into(),
				},
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_content_is_complete() {
		let content = SiteContent::default();
		assert!(!content.profile.name.is_empty());
		assert_eq!(content.profile.roles.len(), 3);
		assert_eq!(content.competencies.len(), 4);
		assert_eq!(content.skill_categories.len(), 4);
		assert_eq!(content.projects.len(), 4);
		assert!(content.skill_categories.iter().all(|c| c.skills.len() == 4));
	}

	#[test]
	fn partial_island_falls_back_to_defaults() {
		let json = r#"{ "profile": { "name": "Ada Lovelace" } }"#;
		let content: SiteContent = serde_json::from_str(json).unwrap();
		assert_eq!(content.profile.name, "Ada Lovelace");
		// Unspecified profile fields and sections keep their defaults.
		assert_eq!(content.profile.roles.len(), 3);
		assert_eq!(content.projects.len(), 4);
	}

	#[test]
	fn full_island_overrides_everything() {
		let json = r#"{
			"profile": {
				"name": "N",
				"tagline": "T",
				"roles": ["R"],
				"bio": "B",
				"email": "e@example.com"
			},
			"competencies": [{ "name": "Rust", "level": 99 }],
			"skill_categories": [],
			"projects": [{ "title": "P", "description": "D" }],
			"social": []
		}"#;
		let content: SiteContent = serde_json::from_str(json).unwrap();
		assert_eq!(content.competencies[0].level, 99);
		assert_eq!(content.projects.len(), 1);
		assert!(content.projects[0].github.is_none());
		assert!(content.skill_categories.is_empty());
	}
}
