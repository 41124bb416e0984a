/// Returns true when `e` is a uniqueness violation on the `tinyurls.slug` column.
///
/// `slug` is the only unique column apart from the autoincrement rowid, so any
/// unique violation raised by an insert into `tinyurls` is a slug collision.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
