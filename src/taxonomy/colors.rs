/// Neutral gray for unknown or missing languages.
pub const DEFAULT_LANG_COLOR: &str = "#8b949e";

/// GitHub's language colors (subset of most-used).
pub fn language_color(language: Option<&str>) -> &'static str {
    let Some(language) = language else {
        return DEFAULT_LANG_COLOR;
    };

    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#3178c6",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "C#" => "#178600",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        "Kotlin" => "#A97BFF",
        "Swift" => "#F05138",
        "Ruby" => "#701516",
        "PHP" => "#4F5D95",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "Dart" => "#00B4AB",
        "Shell" => "#89e051",
        "Vue" => "#41b883",
        "Svelte" => "#ff3e00",
        "Scala" => "#c22d40",
        "R" => "#198CE7",
        "Lua" => "#000080",
        "Haskell" => "#5e5086",
        "Elixir" => "#6e4a7e",
        "Clojure" => "#db5855",
        "SCSS" => "#c6538c",
        _ => DEFAULT_LANG_COLOR,
    }
}
