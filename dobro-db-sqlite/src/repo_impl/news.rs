use super::*;

impl<'a> NewsRepo for DbReadOnly<'a> {
    fn create_news(&self, _news: NewsItem) -> Result<NewsItem> {
        unreachable!();
    }
    fn get_news(&self, id: i64) -> Result<(NewsItem, Option<String>)> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn filter_news(&self, filter: &NewsFilter) -> Result<Vec<(NewsItem, Option<String>)>> {
        filter_news(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_news(&self, _id: i64) -> Result<()> {
        unreachable!();
    }
    fn add_news_favorite(&self, _user_id: i64, _news_id: i64) -> Result<()> {
        unreachable!();
    }
    fn remove_news_favorite(&self, _user_id: i64, _news_id: i64) -> Result<()> {
        unreachable!();
    }
}

impl<'a> NewsRepo for DbReadWrite<'a> {
    fn create_news(&self, news: NewsItem) -> Result<NewsItem> {
        create_news(&mut self.conn.borrow_mut(), news)
    }
    fn get_news(&self, id: i64) -> Result<(NewsItem, Option<String>)> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn filter_news(&self, filter: &NewsFilter) -> Result<Vec<(NewsItem, Option<String>)>> {
        filter_news(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_news(&self, id: i64) -> Result<()> {
        delete_news(&mut self.conn.borrow_mut(), id)
    }
    fn add_news_favorite(&self, user_id: i64, news_id: i64) -> Result<()> {
        add_news_favorite(&mut self.conn.borrow_mut(), user_id, news_id)
    }
    fn remove_news_favorite(&self, user_id: i64, news_id: i64) -> Result<()> {
        remove_news_favorite(&mut self.conn.borrow_mut(), user_id, news_id)
    }
}

impl<'a> NewsRepo for DbConnection<'a> {
    fn create_news(&self, news: NewsItem) -> Result<NewsItem> {
        create_news(&mut self.conn.borrow_mut(), news)
    }
    fn get_news(&self, id: i64) -> Result<(NewsItem, Option<String>)> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn filter_news(&self, filter: &NewsFilter) -> Result<Vec<(NewsItem, Option<String>)>> {
        filter_news(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_news(&self, id: i64) -> Result<()> {
        delete_news(&mut self.conn.borrow_mut(), id)
    }
    fn add_news_favorite(&self, user_id: i64, news_id: i64) -> Result<()> {
        add_news_favorite(&mut self.conn.borrow_mut(), user_id, news_id)
    }
    fn remove_news_favorite(&self, user_id: i64, news_id: i64) -> Result<()> {
        remove_news_favorite(&mut self.conn.borrow_mut(), user_id, news_id)
    }
}

fn create_news(conn: &mut SqliteConnection, news: NewsItem) -> Result<NewsItem> {
    let new_news = models::NewNews {
        title: &news.title,
        description: news.description.as_deref(),
        image: news.image.as_deref(),
        city_id: news.city_id,
        created_by: news.created_by,
        approved_by: news.approved_by,
        meta: news.meta.as_deref(),
        created_at: news.created_at.into_milliseconds(),
    };
    diesel::insert_into(schema::news::table)
        .values(&new_news)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = assigned_row_id(conn)?;
    Ok(NewsItem { id, ..news })
}

fn get_news(conn: &mut SqliteConnection, id: i64) -> Result<(NewsItem, Option<String>)> {
    use schema::{cities, news};
    let (entity, city) = news::table
        .left_join(cities::table)
        .filter(news::dsl::id.eq(id))
        .select((news::all_columns, cities::dsl::name.nullable()))
        .first::<(models::NewsEntity, Option<String>)>(conn)
        .map_err(from_diesel_err)?;
    Ok((load_news(entity), city))
}

fn filter_news(
    conn: &mut SqliteConnection,
    filter: &NewsFilter,
) -> Result<Vec<(NewsItem, Option<String>)>> {
    use schema::{cities, news};
    let mut query = news::table
        .left_join(cities::table)
        .select((news::all_columns, cities::dsl::name.nullable()))
        .order_by(news::dsl::created_at.desc())
        .then_order_by(news::dsl::id.desc())
        .into_boxed();
    if let Some(city) = &filter.city {
        query = query.filter(cities::dsl::name.like(like_contains(city)).escape('\\'));
    }
    if let Some(user_id) = filter.favorited_by {
        let ids = favorite_news_ids(conn, user_id)?;
        query = query.filter(news::dsl::id.eq_any(ids));
    }
    Ok(query
        .load::<(models::NewsEntity, Option<String>)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(entity, city)| (load_news(entity), city))
        .collect())
}

fn favorite_news_ids(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<i64>> {
    use schema::favorite_news::dsl;
    dsl::favorite_news
        .filter(dsl::user_id.eq(user_id))
        .select(dsl::news_id)
        .load::<i64>(conn)
        .map_err(from_diesel_err)
}

fn delete_news(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    {
        use schema::favorite_news::dsl;
        diesel::delete(dsl::favorite_news.filter(dsl::news_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    use schema::news::dsl;
    let rows = diesel::delete(dsl::news.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if rows == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn add_news_favorite(conn: &mut SqliteConnection, user_id: i64, news_id: i64) -> Result<()> {
    use schema::favorite_news::dsl;
    diesel::insert_into(dsl::favorite_news)
        .values((dsl::user_id.eq(user_id), dsl::news_id.eq(news_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_news_favorite(conn: &mut SqliteConnection, user_id: i64, news_id: i64) -> Result<()> {
    use schema::favorite_news::dsl;
    let rows = diesel::delete(
        dsl::favorite_news
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::news_id.eq(news_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if rows == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
