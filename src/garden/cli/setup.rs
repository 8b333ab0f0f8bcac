use clap::{Parser, Subcommand};
use garden::model::Stage;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for dev builds.
/// Format: "0.1.0" without git, "0.1.0@abc1234" or "0.1.0@abc1234-dirty" otherwise
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DIRTY: &str = env!("GIT_DIRTY");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else if GIT_DIRTY == "true" {
            format!("{}@{}-dirty", VERSION, GIT_HASH)
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "garden", bin_name = "garden", version = get_version())]
#[command(about = "Plant, grow and harvest digital garden posts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Garden root directory (defaults to the current directory)
    #[arg(long, global = true, env = "GARDEN_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Create stage directories, templates and an empty store
    Init,

    /// Plant a new seed post
    #[command(alias = "plant")]
    Add {
        /// Post title
        title: String,

        /// HTML content
        #[arg(short, long, default_value = "")]
        content: String,

        /// Comma separated tags
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Comma separated links
        #[arg(short, long, default_value = "")]
        links: String,
    },

    /// Move a seed to growing
    Grow {
        /// List index or title
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,
    },

    /// Move a growing post to harvested
    Harvest {
        /// List index or title
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,
    },

    /// Move a seed or growing post to abandoned
    Abandon {
        /// List index or title
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,
    },

    /// List posts
    #[command(alias = "ls")]
    List {
        /// Only posts in this stage (repeatable)
        #[arg(short, long = "stage", value_name = "STAGE")]
        stages: Vec<Stage>,
    },

    /// Copy edited page content back into the store
    Sync,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["garden"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_takes_comma_lists() {
        let cli =
            Cli::try_parse_from(["garden", "add", "Idea A", "--tags", "a, b", "-c", "<p>x</p>"])
                .unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                content,
                tags,
                links,
            }) => {
                assert_eq!(title, "Idea A");
                assert_eq!(content, "<p>x</p>");
                assert_eq!(tags, "a, b");
                assert_eq!(links, "");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn selectors_collect_words() {
        let cli = Cli::try_parse_from(["garden", "grow", "Idea", "A"]).unwrap();
        match cli.command {
            Some(Commands::Grow { selector }) => assert_eq!(selector, ["Idea", "A"]),
            other => panic!("unexpected {:?}", other),
        }
        assert!(Cli::try_parse_from(["garden", "harvest"]).is_err());
    }

    #[test]
    fn list_stage_filter_parses_names() {
        let cli = Cli::try_parse_from(["garden", "list", "-s", "seeds", "--stage", "growing"])
            .unwrap();
        match cli.command {
            Some(Commands::List { stages }) => {
                assert_eq!(stages, [Stage::Seed, Stage::Growing]);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(Cli::try_parse_from(["garden", "list", "--stage", "compost"]).is_err());
    }

    #[test]
    fn root_is_global() {
        let cli = Cli::try_parse_from(["garden", "sync", "--root", "/tmp/g"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/g")));
    }
}
