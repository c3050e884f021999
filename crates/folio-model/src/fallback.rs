// SPDX-License-Identifier: Apache-2.0

use crate::skill::SkillCategory;

/// Built-in skill entry shown when the live listing is empty or the
/// service is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackSkill {
    pub name: &'static str,
    pub logo: &'static str,
    pub category: SkillCategory,
}

const fn entry(name: &'static str, logo: &'static str, category: SkillCategory) -> FallbackSkill {
    FallbackSkill {
        name,
        logo,
        category,
    }
}

/// The fixed marquee list. Consumers substitute this when the public
/// listing fails or returns no rows, so the display always has content.
#[must_use]
pub const fn fallback_skills() -> &'static [FallbackSkill] {
    use SkillCategory::{Backend, Frontend, Tools};
    const SKILLS: &[FallbackSkill] = &[
        entry("React", "⚛️", Frontend),
        entry("Next.js", "🔺", Frontend),
        entry("TypeScript", "📘", Frontend),
        entry("Tailwind CSS", "🎨", Frontend),
        entry("Framer Motion", "✨", Frontend),
        entry("Node.js", "🟢", Backend),
        entry("Python", "🐍", Backend),
        entry("Prisma", "🔷", Backend),
        entry("PostgreSQL", "🐘", Backend),
        entry("MongoDB", "🍃", Backend),
        entry("Git", "📚", Tools),
        entry("Docker", "🐳", Tools),
        entry("VS Code", "💻", Tools),
        entry("Figma", "🎯", Tools),
        entry("Vercel", "▲", Tools),
        entry("JavaScript", "🟨", Frontend),
        entry("HTML5", "🧡", Frontend),
        entry("CSS3", "🔵", Frontend),
        entry("Express.js", "🚀", Backend),
        entry("GraphQL", "💜", Backend),
    ];
    SKILLS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn fallback_names_are_case_insensitively_unique() {
        let mut seen = BTreeSet::new();
        for skill in fallback_skills() {
            assert!(seen.insert(skill.name.to_lowercase()), "{}", skill.name);
        }
        assert_eq!(seen.len(), 20);
    }
}
