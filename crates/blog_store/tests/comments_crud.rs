use blog_store::db::open_db_in_memory;
use blog_store::{
    CommentRepository, NewComment, NewPost, Post, PostRepository, RepoError,
    SqliteCommentRepository, SqlitePostRepository,
};
use chrono::Utc;
use rusqlite::Connection;
use std::thread::sleep;
use std::time::Duration;
use uuid::Uuid;

fn create_post(conn: &Connection) -> Post {
    SqlitePostRepository::new(conn)
        .create_post(&NewPost {
            title: "Host".to_string(),
            content: "host body".to_string(),
            excerpt: "host".to_string(),
            tags: None,
            publish_date: Utc::now(),
        })
        .unwrap()
}

fn comment_on(post: &Post, author: &str) -> NewComment {
    NewComment {
        post_id: post.id,
        author: author.to_string(),
        content: format!("comment by {author}"),
    }
}

#[test]
fn create_comment_returns_persisted_record() {
    let conn = open_db_in_memory().unwrap();
    let post = create_post(&conn);
    let repo = SqliteCommentRepository::new(&conn);

    let created = repo.create_comment(&comment_on(&post, "ada")).unwrap();
    assert_eq!(created.post_id, post.id);
    assert_eq!(created.author, "ada");

    let listed = repo.list_comments(post.id).unwrap();
    assert_eq!(listed, vec![created]);
}

#[test]
fn comments_list_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let post = create_post(&conn);
    let repo = SqliteCommentRepository::new(&conn);

    let first = repo.create_comment(&comment_on(&post, "first")).unwrap();
    sleep(Duration::from_millis(5));
    let second = repo.create_comment(&comment_on(&post, "second")).unwrap();
    sleep(Duration::from_millis(5));
    let third = repo.create_comment(&comment_on(&post, "third")).unwrap();

    let ids: Vec<Uuid> = repo
        .list_comments(post.id)
        .unwrap()
        .into_iter()
        .map(|comment| comment.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[test]
fn comments_are_scoped_to_their_post() {
    let conn = open_db_in_memory().unwrap();
    let post_a = create_post(&conn);
    let post_b = create_post(&conn);
    let repo = SqliteCommentRepository::new(&conn);

    repo.create_comment(&comment_on(&post_a, "a1")).unwrap();
    repo.create_comment(&comment_on(&post_a, "a2")).unwrap();
    repo.create_comment(&comment_on(&post_b, "b1")).unwrap();

    assert_eq!(repo.list_comments(post_a.id).unwrap().len(), 2);
    assert_eq!(repo.list_comments(post_b.id).unwrap().len(), 1);
    assert!(repo.list_comments(Uuid::new_v4()).unwrap().is_empty());
}

#[test]
fn comment_on_unknown_post_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCommentRepository::new(&conn);
    let missing = Uuid::new_v4();

    let err = repo
        .create_comment(&NewComment {
            post_id: missing,
            author: "ghost".to_string(),
            content: "boo".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, RepoError::MissingPost(id) if id == missing));
    assert!(repo.list_comments(missing).unwrap().is_empty());
    let total: i64 = conn
        .query_row("SELECT COUNT(*) FROM comments;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn delete_comment_reports_whether_row_existed() {
    let conn = open_db_in_memory().unwrap();
    let post = create_post(&conn);
    let repo = SqliteCommentRepository::new(&conn);
    let keep = repo.create_comment(&comment_on(&post, "keep")).unwrap();
    let drop_me = repo.create_comment(&comment_on(&post, "drop")).unwrap();

    assert!(repo.delete_comment(drop_me.id).unwrap());
    assert!(!repo.delete_comment(drop_me.id).unwrap());
    assert!(!repo.delete_comment(Uuid::new_v4()).unwrap());

    let remaining = repo.list_comments(post.id).unwrap();
    assert_eq!(remaining, vec![keep]);
}

#[test]
fn deleting_comment_keeps_parent_post() {
    let conn = open_db_in_memory().unwrap();
    let post = create_post(&conn);
    let comments = SqliteCommentRepository::new(&conn);
    let comment = comments.create_comment(&comment_on(&post, "x")).unwrap();

    assert!(comments.delete_comment(comment.id).unwrap());
    assert!(SqlitePostRepository::new(&conn)
        .get_post(post.id)
        .unwrap()
        .is_some());
}

#[test]
fn comment_serializes_with_camel_case_fields() {
    let conn = open_db_in_memory().unwrap();
    let post = create_post(&conn);
    let comment = SqliteCommentRepository::new(&conn)
        .create_comment(&comment_on(&post, "json"))
        .unwrap();

    let json = serde_json::to_value(&comment).unwrap();
    assert_eq!(json["postId"], post.id.to_string());
    assert!(json.get("createdAt").is_some());
}
