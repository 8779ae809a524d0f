// wire types and calls for the remote content listing
//
// the listing api is an external collaborator: we only rely on each entry
// carrying a name (with extension) and a direct download url
pub mod listing;
pub mod media;
