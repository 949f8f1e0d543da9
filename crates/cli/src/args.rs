use clap::{Args, Parser, Subcommand};

use service::form::ServiceForm;

#[derive(Parser, Debug)]
#[command(name = "servicehub")]
#[command(about = "Browse local service providers and manage your own listings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Featured providers and category tiles
    Home,

    /// Filter and sort every listing
    Browse(BrowseArgs),

    /// Show one provider's profile
    Profile { id: String },

    /// List the listings you have created
    MyServices,

    /// Create a new listing
    Create(ServiceArgs),

    /// Edit one of your listings; only the given fields change
    Edit {
        id: String,
        #[command(flatten)]
        fields: ServiceArgs,
        /// Skill to drop from the listing (repeatable)
        #[arg(long = "remove-skill")]
        remove_skills: Vec<String>,
    },

    /// Delete one of your listings
    Delete { id: String },

    /// Category ids usable with --category
    Categories,

    /// District names usable with --location
    Districts,
}

#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against name, description and skills
    #[arg(long)]
    pub search: Option<String>,
    /// District name, or "all"
    #[arg(long)]
    pub location: Option<String>,
    /// Category id, or "all"
    #[arg(long)]
    pub category: Option<String>,
    /// relevance, rating or newest
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ServiceArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub whatsapp: Option<String>,
    #[arg(long)]
    pub facebook: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    /// Skill offered (repeatable)
    #[arg(long = "skill")]
    pub skills: Vec<String>,
}

impl ServiceArgs {
    /// Overwrite the form fields that were given on the command line and add any skills.
    pub fn apply_to(self, form: &mut ServiceForm) {
        let slots = [
            (self.name, &mut form.name),
            (self.category, &mut form.category),
            (self.description, &mut form.description),
            (self.location, &mut form.location),
            (self.phone, &mut form.phone),
            (self.email, &mut form.email),
            (self.whatsapp, &mut form.whatsapp),
            (self.facebook, &mut form.facebook),
            (self.instagram, &mut form.instagram),
            (self.linkedin, &mut form.linkedin),
        ];
        for (value, slot) in slots {
            if let Some(v) = value {
                *slot = v;
            }
        }
        for skill in &self.skills {
            form.add_skill(skill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_browse_filters() {
        let cli = Cli::try_parse_from([
            "servicehub", "browse", "--search", "pipe", "--location", "Colombo", "--sort", "rating",
        ])
        .expect("parse");
        match cli.command {
            Command::Browse(a) => {
                assert_eq!(a.search.as_deref(), Some("pipe"));
                assert_eq!(a.location.as_deref(), Some("Colombo"));
                assert_eq!(a.category, None);
                assert_eq!(a.sort.as_deref(), Some("rating"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_repeated_skills_and_kebab_subcommands() {
        let cli = Cli::try_parse_from([
            "servicehub", "create", "--name", "Acme", "--skill", "Pipe Repair", "--skill", "Leak Detection",
        ])
        .expect("parse");
        match cli.command {
            Command::Create(a) => assert_eq!(a.skills, vec!["Pipe Repair", "Leak Detection"]),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(matches!(
            Cli::try_parse_from(["servicehub", "my-services"]).map(|c| c.command),
            Ok(Command::MyServices)
        ));
    }

    #[test]
    fn profile_requires_an_id() {
        assert!(Cli::try_parse_from(["servicehub", "profile"]).is_err());
    }

    #[test]
    fn apply_to_only_touches_given_fields() {
        let mut form = ServiceForm { name: "Old".into(), phone: "0771234567".into(), ..ServiceForm::default() };
        form.add_skill("Pipe Repair");
        let args = ServiceArgs {
            name: Some("New".into()),
            skills: vec!["Pipe Repair".into(), "Drain Cleaning".into()],
            ..ServiceArgs::default()
        };
        args.apply_to(&mut form);
        assert_eq!(form.name, "New");
        assert_eq!(form.phone, "0771234567");
        assert_eq!(form.skills, vec!["Pipe Repair", "Drain Cleaning"]);
    }
}
