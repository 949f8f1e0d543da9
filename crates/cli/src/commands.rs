//! Subcommand dispatch: each command becomes a page view and, for mutations, a notice.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use service::form::ServiceForm;
use service::listing::{FilterCriteria, SortBy};
use service::navigation::Route;
use service::notice::Notice;
use service::presentation::{CategoryTile, PageView};
use service::{Directory, ServiceError};

use crate::args::{BrowseArgs, Command};

/// What a command produced: a view for stdout and optionally a notice for stderr.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    Page(PageView),
    Categories(Vec<CategoryTile>),
    Districts(Vec<String>),
}

#[derive(Debug)]
pub struct Output {
    pub rendered: Rendered,
    pub notice: Option<Notice>,
}

impl Output {
    fn page(view: PageView) -> Self {
        Self { rendered: Rendered::Page(view), notice: None }
    }

    fn with_notice(view: PageView, notice: Notice) -> Self {
        Self { rendered: Rendered::Page(view), notice: Some(notice) }
    }

    /// Pretty JSON of the rendered view, newline terminated.
    pub fn write_json<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.rendered)?;
        writeln!(out)?;
        Ok(())
    }
}

fn criteria_from(args: BrowseArgs) -> Result<FilterCriteria, ServiceError> {
    let sort: SortBy = args.sort.as_deref().unwrap_or_default().parse()?;
    Ok(FilterCriteria {
        search: args.search,
        location: args.location,
        category: args.category,
        sort,
    })
}

pub async fn execute(directory: &Directory, command: Command) -> Result<Output, ServiceError> {
    debug!(?command, "execute");
    match command {
        Command::Home => Ok(Output::page(directory.render(&Route::home()).await?)),
        Command::Browse(args) => {
            let criteria = criteria_from(args)?;
            Ok(Output::page(PageView::Browse(directory.browse(criteria).await)))
        }
        Command::Profile { id } => Ok(Output::page(directory.render(&Route::profile(id)).await?)),
        Command::MyServices => Ok(Output::page(directory.render(&Route::my_profile()).await?)),
        Command::Create(fields) => {
            let mut form = ServiceForm::default();
            fields.apply_to(&mut form);
            directory.submit_create(form).await?;
            let view = directory.render(&Route::my_profile()).await?;
            Ok(Output::with_notice(view, Notice::Created))
        }
        Command::Edit { id, fields, remove_skills } => {
            let mut form = directory.edit_form(&id).await?;
            for skill in &remove_skills {
                form.remove_skill(skill);
            }
            fields.apply_to(&mut form);
            directory.submit_update(&id, form).await?;
            let view = directory.render(&Route::my_profile()).await?;
            Ok(Output::with_notice(view, Notice::Updated))
        }
        Command::Delete { id } => {
            let notice = if directory.delete(&id).await? { Notice::Deleted } else { Notice::AlreadyDeleted };
            let view = directory.render(&Route::my_profile()).await?;
            Ok(Output::with_notice(view, notice))
        }
        Command::Categories => Ok(Output { rendered: Rendered::Categories(directory.category_tiles()), notice: None }),
        Command::Districts => Ok(Output {
            rendered: Rendered::Districts(directory.reference().districts().to_vec()),
            notice: None,
        }),
    }
}
