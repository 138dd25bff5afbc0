//! `wantage gallery [slug]`: photo albums.

use wantage_content::{ContentClient, normalize_album, normalize_albums};
use wantage_core::{AlbumRecord, AlbumView, ImageUrlBuilder};

use crate::cli::OutputFormat;
use crate::commands::{ellipsis, join_lines, print_json};
use crate::config::DisplaySettings;
use crate::error::{ClientError, ClientResult};

pub async fn list(
    client: &ContentClient,
    display: &DisplaySettings,
    output: OutputFormat,
) -> ClientResult<()> {
    let records = normalize_albums(&client.albums().await?);
    let albums = build_albums(&records, client.images());

    match output {
        OutputFormat::Json => print_json(&albums),
        OutputFormat::Text => {
            print!("{}", render_list(&albums, display));
            Ok(())
        }
    }
}

pub async fn show(client: &ContentClient, slug: &str, output: OutputFormat) -> ClientResult<()> {
    let document = client
        .album_by_slug(slug)
        .await?
        .ok_or_else(|| ClientError::NotFound(format!("album \"{}\"", slug)))?;
    let album = AlbumView::from_record(&normalize_album(&document), client.images())
        .ok_or_else(|| ClientError::NotFound(format!("album \"{}\" has no photos", slug)))?;

    match output {
        OutputFormat::Json => print_json(&album),
        OutputFormat::Text => {
            print!("{}", render_album(&album));
            Ok(())
        }
    }
}

/// Converts records, hiding albums without usable photos.
pub fn build_albums(records: &[AlbumRecord], images: &ImageUrlBuilder) -> Vec<AlbumView> {
    records
        .iter()
        .filter_map(|record| AlbumView::from_record(record, images))
        .collect()
}

pub fn render_list(albums: &[AlbumView], display: &DisplaySettings) -> String {
    if albums.is_empty() {
        return "No albums yet\n".to_string();
    }

    let mut lines = Vec::new();
    for (index, album) in albums.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!(
            "{} - {} ({})",
            album.title,
            album.date,
            photo_count(album.photo_count)
        ));
        if !album.description.is_empty() {
            lines.push(format!(
                "  {}",
                ellipsis(&album.description, display.max_description_length)
            ));
        }
        lines.push(format!("  {}", album.url));
    }
    join_lines(lines)
}

pub fn render_album(album: &AlbumView) -> String {
    let mut lines = vec![
        album.title.clone(),
        format!("{} · {}", album.date, photo_count(album.photo_count)),
    ];
    if !album.description.is_empty() {
        lines.push(String::new());
        lines.push(album.description.clone());
    }
    lines.push(String::new());
    lines.extend(album.preview.iter().map(|photo| match &photo.caption {
        Some(caption) => format!("  {} ({}): {}", photo.alt, caption, photo.url),
        None => format!("  {}: {}", photo.alt, photo.url),
    }));
    if album.remaining_count > 0 {
        lines.push(format!("  +{} more", album.remaining_count));
    }
    join_lines(lines)
}

fn photo_count(count: usize) -> String {
    if count == 1 {
        "1 photo".to_string()
    } else {
        format!("{} photos", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wantage_core::ImageSource;

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new("proj", "production")
    }

    fn album(id: &str, title: &str, photos: usize) -> AlbumRecord {
        let mut record = AlbumRecord::new(id, title);
        record.slug = Some(id.to_string());
        record.album_date = Some("2024-06-15".to_string());
        record.images = (1..=photos)
            .map(|n| ImageSource::from_url(format!("https://cdn.example.org/{}/{}.jpg", id, n)))
            .collect();
        record
    }

    #[test]
    fn empty_albums_are_hidden() {
        let records = vec![album("bloom", "Bloom 2024", 2), album("empty", "Nothing", 0)];
        let albums = build_albums(&records, &images());
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].id, "bloom");
    }

    #[test]
    fn render_list_text() {
        let mut party = album("party", "Street party", 1);
        party.description = Some("Photos from the big day.".to_string());
        let albums = build_albums(&[album("bloom", "Bloom 2024", 7), party], &images());
        insta::assert_snapshot!(render_list(&albums, &DisplaySettings::default()), @r"
        Bloom 2024 - 15 June 2024 (7 photos)
          /gallery/bloom

        Street party - 15 June 2024 (1 photo)
          Photos from the big day.
          /gallery/party
        ");
    }

    #[test]
    fn render_album_preview() {
        let mut record = album("bloom", "Bloom 2024", 7);
        record.images[0] = ImageSource::from_url("https://cdn.example.org/bloom/1.jpg")
            .with_alt("Hanging baskets")
            .with_caption("Number 12");
        let view = AlbumView::from_record(&record, &images()).unwrap();
        insta::assert_snapshot!(render_album(&view), @r"
        Bloom 2024
        15 June 2024 · 7 photos

          Hanging baskets (Number 12): https://cdn.example.org/bloom/1.jpg?w=400&h=400
          Bloom 2024 - Photo 2: https://cdn.example.org/bloom/2.jpg?w=400&h=400
          Bloom 2024 - Photo 3: https://cdn.example.org/bloom/3.jpg?w=400&h=400
          Bloom 2024 - Photo 4: https://cdn.example.org/bloom/4.jpg?w=400&h=400
          Bloom 2024 - Photo 5: https://cdn.example.org/bloom/5.jpg?w=400&h=400
          +2 more
        ");
    }

    #[test]
    fn no_albums() {
        assert_eq!(render_list(&[], &DisplaySettings::default()), "No albums yet\n");
    }
}
