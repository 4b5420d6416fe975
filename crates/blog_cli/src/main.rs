//! CLI smoke entry point.
//!
//! Loads settings from the environment, opens the process-wide store and
//! prints one line per post, newest first. Exits non-zero when the store
//! cannot be initialized.

use blog_store::{api, configure_store, init_logging_from_config, LogConfig, StoreConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging_from_config(&LogConfig::from_env()) {
        eprintln!("blog_cli: logging disabled: {err}");
    }

    let store_config = StoreConfig::from_env();
    let db_path = store_config.db_path.clone();
    if let Err(err) = configure_store(store_config) {
        eprintln!("blog_cli: {err}");
        return ExitCode::FAILURE;
    }

    let posts = match api::get_all_posts() {
        Ok(posts) => posts,
        Err(err) => {
            log::error!("event=cli_list module=cli status=error error={err}");
            eprintln!("blog_cli: failed to read `{}`: {err}", db_path.display());
            return ExitCode::FAILURE;
        }
    };

    println!(
        "blog_store version={} db={} posts={}",
        blog_store::store_version(),
        db_path.display(),
        posts.len()
    );
    for post in &posts {
        let comments = match api::get_comments_by_post_id(post.id) {
            Ok(comments) => comments.len(),
            Err(err) => {
                log::error!(
                    "event=cli_comments module=cli status=error post_id={} error={err}",
                    post.id
                );
                eprintln!("blog_cli: failed to read comments of {}: {err}", post.id);
                return ExitCode::FAILURE;
            }
        };
        println!(
            "{}  {}  [{}]  comments={}",
            post.publish_date.format("%Y-%m-%d"),
            post.title,
            post.tag_list().join(", "),
            comments
        );
    }

    ExitCode::SUCCESS
}
